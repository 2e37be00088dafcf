use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::client::{repository::ClientRepository, ClientService};

use crate::openapi::ApiDoc;

pub mod clients;

/// Shared handler state. The repository is chosen by the caller.
pub struct ServerState<R: ClientRepository> {
    pub clients: Arc<ClientService<R>>,
}

impl<R: ClientRepository> Clone for ServerState<R> {
    fn clone(&self) -> Self {
        Self { clients: Arc::clone(&self.clients) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, client CRUD and API docs
pub fn build_router<R: ClientRepository + 'static>(state: ServerState<R>, cors: CorsLayer) -> Router {
    let client_routes = Router::new()
        .route("/clients", get(clients::list::<R>).post(clients::create::<R>))
        .route(
            "/clients/:id",
            get(clients::retrieve::<R>)
                .patch(clients::update::<R>)
                .delete(clients::delete::<R>),
        );

    Router::new()
        .route("/health", get(health))
        .merge(client_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
