//! Salted one-way password hashing (Argon2id, PHC string output).

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, PasswordHash, Version,
};
use configs::SecurityConfig;
use rand::rngs::OsRng;

use crate::errors::ServiceError;

#[derive(Clone, Debug)]
pub struct PasswordHashing {
    params: Params,
}

impl Default for PasswordHashing {
    fn default() -> Self { Self { params: Params::default() } }
}

impl PasswordHashing {
    pub fn new(cfg: &SecurityConfig) -> Result<Self, ServiceError> {
        let params = Params::new(cfg.hash_memory_kib, cfg.hash_iterations, cfg.hash_parallelism, None)
            .map_err(|e| ServiceError::Hash(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash with a fresh random salt; two calls on the same input differ.
    pub fn hash(&self, plain: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| ServiceError::Hash(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    /// Cost parameters are read back from the PHC string, so hashes made
    /// under older settings still verify.
    pub fn verify(&self, plain: &str, phc: &str) -> bool {
        match PasswordHash::new(phc) {
            Ok(parsed) => self.argon().verify_password(plain.as_bytes(), &parsed).is_ok(),
            Err(_) => false,
        }
    }
}
