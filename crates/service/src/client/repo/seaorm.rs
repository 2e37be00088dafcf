use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::client::domain::{ClientPatch, ClientRecord, NewClient};
use crate::client::repository::ClientRepository;
use crate::errors::ServiceError;
use models::errors::ModelError;

/// The only unique index on `client` is the email one.
fn client_err(e: ModelError) -> ServiceError {
    match e {
        ModelError::UniqueViolation(_) => ServiceError::email_conflict(),
        other => other.into(),
    }
}

pub struct SeaOrmClientRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<ClientRecord>, ServiceError> {
        let res = models::client::find_by_email(&self.db, email).await.map_err(client_err)?;
        Ok(res.map(ClientRecord::from))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ClientRecord>, ServiceError> {
        let res = models::client::find_by_id(&self.db, id).await.map_err(client_err)?;
        Ok(res.map(ClientRecord::from))
    }

    async fn list(&self) -> Result<Vec<ClientRecord>, ServiceError> {
        let rows = models::client::list_all(&self.db).await.map_err(client_err)?;
        Ok(rows.into_iter().map(ClientRecord::from).collect())
    }

    async fn create(&self, client: NewClient) -> Result<ClientRecord, ServiceError> {
        let created = models::client::create(&self.db, &client.name, &client.email, client.password_hash, client.telefone)
            .await
            .map_err(client_err)?;
        Ok(created.into())
    }

    async fn update(&self, id: Uuid, patch: ClientPatch) -> Result<Option<ClientRecord>, ServiceError> {
        let txn = self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let updated = models::client::update_fields(&txn, id, patch.into()).await.map_err(client_err)?;
        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(updated.map(ClientRecord::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        models::client::hard_delete(&self.db, id).await.map_err(client_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn new_client(email: &str) -> NewClient {
        NewClient { name: "Repo".into(), email: email.into(), password_hash: "$argon2id$v=19$stub".into(), telefone: 11912345678 }
    }

    #[tokio::test]
    async fn seaorm_repository_roundtrip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmClientRepository { db };

        let email = format!("repo_{}@example.com", Uuid::new_v4());
        let created = repo.create(new_client(&email)).await?;
        assert_eq!(repo.find_by_email(&email).await?.map(|c| c.id), Some(created.id));

        let dup = repo.create(new_client(&email)).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(ref m)) if m == "Email already exists"));

        let patch = ClientPatch { telefone: Some(7), ..Default::default() };
        let updated = repo.update(created.id, patch).await?.expect("exists");
        assert_eq!(updated.telefone, 7);
        assert_eq!(updated.name, "Repo");

        // Moving onto another client's email hits the unique index
        let other_email = format!("repo_{}@example.com", Uuid::new_v4());
        let other = repo.create(new_client(&other_email)).await?;
        let clash = ClientPatch { email: Some(other_email.clone()), ..Default::default() };
        let res = repo.update(created.id, clash).await;
        assert!(matches!(res, Err(ServiceError::Conflict(ref m)) if m == "Email already exists"));
        assert_eq!(repo.find_by_id(created.id).await?.map(|c| c.email), Some(email.clone()));
        assert!(repo.delete(other.id).await?);

        assert!(repo.delete(created.id).await?);
        assert!(repo.find_by_id(created.id).await?.is_none());
        assert!(repo.update(created.id, ClientPatch::default()).await?.is_none());
        assert!(!repo.delete(created.id).await?);
        Ok(())
    }
}
