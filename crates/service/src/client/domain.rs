use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Creation input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub telefone: i64,
}

/// Partial update input; absent fields keep their stored values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClientInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub telefone: Option<i64>,
}

/// Stored client, including the password hash
#[derive(Debug, Clone)]
pub struct ClientRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub telefone: i64,
    pub created_at: DateTime<FixedOffset>,
}

/// Insert payload with an already-hashed password
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub telefone: i64,
}

/// Field-level patch with an already-hashed password
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub telefone: Option<i64>,
}

/// Outbound view of a client. Has no password field at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub telefone: i64,
    pub created_at: DateTime<FixedOffset>,
}

impl From<ClientRecord> for ClientResponse {
    fn from(r: ClientRecord) -> Self {
        Self { id: r.id, name: r.name, email: r.email, telefone: r.telefone, created_at: r.created_at }
    }
}

impl From<models::client::Model> for ClientRecord {
    fn from(m: models::client::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            password_hash: m.password,
            telefone: m.telefone,
            created_at: m.created_at,
        }
    }
}

impl From<ClientPatch> for models::client::ClientChanges {
    fn from(p: ClientPatch) -> Self {
        Self { name: p.name, email: p.email, password_hash: p.password_hash, telefone: p.telefone }
    }
}
