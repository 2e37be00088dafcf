//! Widen `name`, `email` and `password` columns to unbounded `text`.
//!
//! Names and emails carry no length limit.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Client::Table)
                    .modify_column(ColumnDef::new(Client::Name).text().not_null())
                    .modify_column(ColumnDef::new(Client::Email).text().not_null())
                    .modify_column(ColumnDef::new(Client::Password).text().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Contact::Table)
                    .modify_column(ColumnDef::new(Contact::Name).text().not_null())
                    .modify_column(ColumnDef::new(Contact::Email).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Client::Table)
                    .modify_column(ColumnDef::new(Client::Name).string_len(255).not_null())
                    .modify_column(ColumnDef::new(Client::Email).string_len(255).not_null())
                    .modify_column(ColumnDef::new(Client::Password).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Contact::Table)
                    .modify_column(ColumnDef::new(Contact::Name).string_len(255).not_null())
                    .modify_column(ColumnDef::new(Contact::Email).string_len(255).not_null())
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Client { Table, Name, Email, Password }

#[derive(DeriveIden)]
enum Contact { Table, Name, Email }
