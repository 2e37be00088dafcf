use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct CreateClientRequest { pub name: String, pub email: String, pub password: String, pub telefone: i64 }

#[derive(Serialize, ToSchema)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub telefone: Option<i64>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponseDoc {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub telefone: i64,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clients::list,
        crate::routes::clients::create,
        crate::routes::clients::retrieve,
        crate::routes::clients::update,
        crate::routes::clients::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            CreateClientRequest,
            UpdateClientRequest,
            ClientResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "clients")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_client_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/clients"));
        assert!(doc.paths.paths.contains_key("/clients/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
