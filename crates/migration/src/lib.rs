//! Migrator registering entity-specific migrations in dependency order.
//! Indexes follow the tables; later migrations only alter existing columns.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_client;
mod m20240101_000002_create_contact;
mod m20240101_000003_add_indexes;
mod m20240101_000004_unbounded_text_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_client::Migration),
            Box::new(m20240101_000002_create_contact::Migration),
            Box::new(m20240101_000003_add_indexes::Migration),
            Box::new(m20240101_000004_unbounded_text_columns::Migration),
        ]
    }
}
