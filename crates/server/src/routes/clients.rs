use axum::{extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use tracing::info;
use uuid::Uuid;

use service::client::domain::{ClientResponse, CreateClientInput, UpdateClientInput};
use service::client::repository::ClientRepository;

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/clients", tag = "clients",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ClientResponseDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list<R: ClientRepository + 'static>(State(state): State<ServerState<R>>) -> Result<Json<Vec<ClientResponse>>, JsonApiError> {
    let clients = state.clients.read_clients().await?;
    info!(count = clients.len(), "list clients");
    Ok(Json(clients))
}

#[utoipa::path(
    post, path = "/clients", tag = "clients",
    request_body = crate::openapi::CreateClientRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ClientResponseDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 422, description = "Malformed body", body = crate::openapi::ErrorResponse),
        (status = 409, description = "Email already exists", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create<R: ClientRepository + 'static>(
    State(state): State<ServerState<R>>,
    payload: Result<Json<CreateClientInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ClientResponse>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.clients.create_client(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/clients/{id}", tag = "clients",
    params(("id" = Uuid, Path, description = "Client ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ClientResponseDoc),
        (status = 404, description = "Client not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn retrieve<R: ClientRepository + 'static>(
    State(state): State<ServerState<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientResponse>, JsonApiError> {
    Ok(Json(state.clients.retrieve_client(id).await?))
}

#[utoipa::path(
    patch, path = "/clients/{id}", tag = "clients",
    params(("id" = Uuid, Path, description = "Client ID")),
    request_body = crate::openapi::UpdateClientRequest,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ClientResponseDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Client not found", body = crate::openapi::ErrorResponse),
        (status = 409, description = "Email already exists", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update<R: ClientRepository + 'static>(
    State(state): State<ServerState<R>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateClientInput>, JsonRejection>,
) -> Result<Json<ClientResponse>, JsonApiError> {
    let Json(input) = payload?;
    Ok(Json(state.clients.update_client(id, input).await?))
}

#[utoipa::path(
    delete, path = "/clients/{id}", tag = "clients",
    params(("id" = Uuid, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Client not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete<R: ClientRepository + 'static>(
    State(state): State<ServerState<R>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    state.clients.delete_client(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
