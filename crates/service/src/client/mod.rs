//! Client module: three-layer architecture (domain, repository, service).
//!
//! Owns the client lifecycle rules: email uniqueness, password hashing and
//! password-free response shaping.

pub mod domain;
pub mod policy;
pub mod repository;
pub mod service;
pub mod repo {
    pub mod seaorm;
}

pub use service::ClientService;
