//! Create `contact` table with FK to `client`.
//!
//! No cascade: removing a client that still owns contacts is rejected by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(uuid(Contact::Id).primary_key())
                    .col(string_len(Contact::Name, 255).not_null())
                    .col(string_len(Contact::Email, 255).not_null())
                    .col(big_integer(Contact::Telefone).not_null())
                    .col(
                        timestamp_with_time_zone(Contact::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(uuid(Contact::ClientId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_client")
                            .from(Contact::Table, Contact::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact { Table, Id, Name, Email, Telefone, CreatedAt, ClientId }

#[derive(DeriveIden)]
enum Client { Table, Id }
