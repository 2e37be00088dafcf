use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{ClientPatch, ClientRecord, NewClient};
use crate::errors::ServiceError;

/// Repository abstraction for client persistence.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Exact, case-sensitive match.
    async fn find_by_email(&self, email: &str) -> Result<Option<ClientRecord>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ClientRecord>, ServiceError>;
    async fn list(&self) -> Result<Vec<ClientRecord>, ServiceError>;
    /// Fails with `Conflict` when the email is already stored.
    async fn create(&self, client: NewClient) -> Result<ClientRecord, ServiceError>;
    /// `Ok(None)` when the id does not exist.
    async fn update(&self, id: Uuid, patch: ClientPatch) -> Result<Option<ClientRecord>, ServiceError>;
    /// `Ok(false)` when the id does not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Keeps insertion order and rejects duplicate emails like the unique index does.
    #[derive(Default)]
    pub struct MockClientRepository {
        clients: Mutex<Vec<ClientRecord>>,
    }

    impl MockClientRepository {
        fn email_taken(clients: &[ClientRecord], email: &str, except: Option<Uuid>) -> bool {
            clients.iter().any(|c| c.email == email && Some(c.id) != except)
        }
    }

    #[async_trait]
    impl ClientRepository for MockClientRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<ClientRecord>, ServiceError> {
            let clients = self.clients.lock().unwrap();
            Ok(clients.iter().find(|c| c.email == email).cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<ClientRecord>, ServiceError> {
            let clients = self.clients.lock().unwrap();
            Ok(clients.iter().find(|c| c.id == id).cloned())
        }

        async fn list(&self) -> Result<Vec<ClientRecord>, ServiceError> {
            Ok(self.clients.lock().unwrap().clone())
        }

        async fn create(&self, client: NewClient) -> Result<ClientRecord, ServiceError> {
            let mut clients = self.clients.lock().unwrap();
            if Self::email_taken(&clients, &client.email, None) {
                return Err(ServiceError::email_conflict());
            }
            let record = ClientRecord {
                id: Uuid::new_v4(),
                name: client.name,
                email: client.email,
                password_hash: client.password_hash,
                telefone: client.telefone,
                created_at: chrono::Utc::now().into(),
            };
            clients.push(record.clone());
            Ok(record)
        }

        async fn update(&self, id: Uuid, patch: ClientPatch) -> Result<Option<ClientRecord>, ServiceError> {
            let mut clients = self.clients.lock().unwrap();
            if let Some(email) = &patch.email {
                if Self::email_taken(&clients, email, Some(id)) {
                    return Err(ServiceError::email_conflict());
                }
            }
            let Some(found) = clients.iter_mut().find(|c| c.id == id) else { return Ok(None) };
            if let Some(name) = patch.name { found.name = name; }
            if let Some(email) = patch.email { found.email = email; }
            if let Some(hash) = patch.password_hash { found.password_hash = hash; }
            if let Some(telefone) = patch.telefone { found.telefone = telefone; }
            Ok(Some(found.clone()))
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut clients = self.clients.lock().unwrap();
            let before = clients.len();
            clients.retain(|c| c.id != id);
            Ok(clients.len() != before)
        }
    }
}
