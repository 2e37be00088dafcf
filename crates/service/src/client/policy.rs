use configs::ValidationConfig;

use super::domain::{CreateClientInput, UpdateClientInput};
use crate::errors::ServiceError;

/// Optional input checks applied before any storage access. The default
/// accepts everything.
#[derive(Clone, Debug, Default)]
pub struct ValidationPolicy {
    pub check_email_format: bool,
    pub min_password_len: usize,
}

impl From<&ValidationConfig> for ValidationPolicy {
    fn from(cfg: &ValidationConfig) -> Self {
        Self { check_email_format: cfg.check_email_format, min_password_len: cfg.min_password_len }
    }
}

impl ValidationPolicy {
    pub fn check_create(&self, input: &CreateClientInput) -> Result<(), ServiceError> {
        self.check_email(&input.email)?;
        self.check_password(&input.password)
    }

    pub fn check_update(&self, input: &UpdateClientInput) -> Result<(), ServiceError> {
        if let Some(email) = &input.email { self.check_email(email)?; }
        if let Some(password) = &input.password { self.check_password(password)?; }
        Ok(())
    }

    fn check_email(&self, email: &str) -> Result<(), ServiceError> {
        if self.check_email_format {
            models::client::validate_email(email)?;
        }
        Ok(())
    }

    fn check_password(&self, password: &str) -> Result<(), ServiceError> {
        if password.chars().count() < self.min_password_len {
            return Err(ServiceError::Validation(format!("password too short (>={})", self.min_password_len)));
        }
        Ok(())
    }
}
