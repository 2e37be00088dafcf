use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{ClientPatch, ClientResponse, CreateClientInput, NewClient, UpdateClientInput};
use super::policy::ValidationPolicy;
use super::repository::ClientRepository;
use crate::errors::ServiceError;
use crate::password::PasswordHashing;

/// Client business service independent of web framework
pub struct ClientService<R: ClientRepository> {
    repo: Arc<R>,
    hasher: PasswordHashing,
    policy: ValidationPolicy,
}

impl<R: ClientRepository> ClientService<R> {
    /// Default hashing cost and no input checks.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo, hasher: PasswordHashing::default(), policy: ValidationPolicy::default() }
    }

    pub fn with_config(repo: Arc<R>, hasher: PasswordHashing, policy: ValidationPolicy) -> Self {
        Self { repo, hasher, policy }
    }

    pub fn hasher(&self) -> &PasswordHashing { &self.hasher }

    /// Register a new client with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::client::{ClientService, repository::mock::MockClientRepository};
    /// use service::client::domain::CreateClientInput;
    /// use std::sync::Arc;
    /// let svc = ClientService::new(Arc::new(MockClientRepository::default()));
    /// let input = CreateClientInput { name: "Ana".into(), email: "ana@x.com".into(), password: "secret1".into(), telefone: 11999990000 };
    /// let client = tokio_test::block_on(svc.create_client(input)).unwrap();
    /// assert_eq!(client.email, "ana@x.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_client(&self, input: CreateClientInput) -> Result<ClientResponse, ServiceError> {
        self.policy.check_create(&input)?;
        if let Some(existing) = self.repo.find_by_email(&input.email).await? {
            debug!(client_id = %existing.id, "email already registered");
            return Err(ServiceError::email_conflict());
        }

        let password_hash = self.hasher.hash(&input.password)?;
        let created = self
            .repo
            .create(NewClient { name: input.name, email: input.email, password_hash, telefone: input.telefone })
            .await?;
        info!(client_id = %created.id, email = %created.email, "client_created");
        Ok(created.into())
    }

    /// All clients in storage order.
    #[instrument(skip(self))]
    pub async fn read_clients(&self) -> Result<Vec<ClientResponse>, ServiceError> {
        let clients = self.repo.list().await?;
        debug!(count = clients.len(), "clients_listed");
        Ok(clients.into_iter().map(ClientResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn retrieve_client(&self, id: Uuid) -> Result<ClientResponse, ServiceError> {
        let found = self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Client"))?;
        Ok(found.into())
    }

    /// Apply a partial update. A new password is re-hashed before it is stored.
    #[instrument(skip(self, input))]
    pub async fn update_client(&self, id: Uuid, input: UpdateClientInput) -> Result<ClientResponse, ServiceError> {
        self.policy.check_update(&input)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Client"));
        }

        let password_hash = match input.password.as_deref() {
            Some(plain) => Some(self.hasher.hash(plain)?),
            None => None,
        };
        let patch = ClientPatch { name: input.name, email: input.email, password_hash, telefone: input.telefone };
        // The row can vanish between lookup and write.
        let updated = self.repo.update(id, patch).await?.ok_or_else(|| ServiceError::not_found("Client"))?;
        info!(client_id = %updated.id, "client_updated");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_client(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Client"));
        }
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("Client"));
        }
        info!(client_id = %id, "client_deleted");
        Ok(())
    }
}
