use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Client: unique email. Concurrent creates that both pass the
        // service-level pre-check are rejected here.
        manager
            .create_index(
                Index::create()
                    .name("uniq_client_email")
                    .table(Client::Table)
                    .col(Client::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Contact: unique email
        manager
            .create_index(
                Index::create()
                    .name("uniq_contact_email")
                    .table(Contact::Table)
                    .col(Contact::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Contact: index on client_id
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_client")
                    .table(Contact::Table)
                    .col(Contact::ClientId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_client_email").table(Client::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_contact_email").table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contact_client").table(Contact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Client { Table, Email }

#[derive(DeriveIden)]
enum Contact { Table, Email, ClientId }
