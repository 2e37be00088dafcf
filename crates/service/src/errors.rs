use thiserror::Error;
use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn email_conflict() -> Self { Self::Conflict("Email already exists".into()) }

    /// HTTP-equivalent status for external mapping/logging
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::Conflict(_) => 409,
            ServiceError::NotFound(_) => 404,
            ServiceError::Hash(_) | ServiceError::Db(_) => 500,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::UniqueViolation(msg) => ServiceError::Conflict(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_and_codes() {
        let c = ServiceError::email_conflict();
        assert_eq!(c.to_string(), "Email already exists");
        assert_eq!(c.status_code(), 409);

        let n = ServiceError::not_found("Client");
        assert_eq!(n.to_string(), "Client not found");
        assert_eq!(n.status_code(), 404);

        assert_eq!(ServiceError::Db("down".into()).status_code(), 500);
        assert_eq!(ServiceError::Validation("bad".into()).status_code(), 400);
    }

    #[test]
    fn model_errors_are_classified() {
        let e: ServiceError = ModelError::UniqueViolation("uniq_client_email".into()).into();
        assert!(matches!(e, ServiceError::Conflict(_)));
        let e: ServiceError = ModelError::Db("io".into()).into();
        assert!(matches!(e, ServiceError::Db(_)));
    }
}
