use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryFilter};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::client;
use crate::errors::{self, db_err};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub telefone: i64,
    pub created_at: DateTimeWithTimeZone,
    pub client_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Client }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Client => Entity::belongs_to(client::Entity).from(Column::ClientId).to(client::Column::Id).into() }
    }
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef { Relation::Client.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, client_id: Uuid, name: &str, email: &str, telefone: i64) -> Result<Model, errors::ModelError> {
    client::validate_name(name)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        telefone: Set(telefone),
        created_at: Set(Utc::now().into()),
        client_id: Set(client_id),
    };
    am.insert(db).await.map_err(db_err)
}

/// Contacts owned by one client.
pub async fn list_by_client(db: &DatabaseConnection, client_id: Uuid) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find().filter(Column::ClientId.eq(client_id)).all(db).await.map_err(db_err)
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    Ok(())
}
