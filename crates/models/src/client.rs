use sea_orm::{entity::prelude::*, ConnectionTrait, DatabaseConnection, QueryFilter, QuerySelect, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::contact;
use crate::errors::{self, db_err, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// PHC-formatted password hash. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub telefone: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contact,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Contact => Entity::has_many(contact::Entity).into() }
    }
}

impl Related<contact::Entity> for Entity {
    fn to() -> RelationDef { Relation::Contact.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column changes for a partial update. `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default)]
pub struct ClientChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub telefone: Option<i64>,
}

impl ClientChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password_hash.is_none() && self.telefone.is_none()
    }
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.trim().is_empty() && !domain.trim().is_empty() => Ok(()),
        _ => Err(ModelError::Validation("invalid email".into())),
    }
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::Validation("name required".into())); }
    Ok(())
}

/// Insert a client. `password_hash` must already be hashed.
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    password_hash: String,
    telefone: i64,
) -> Result<Model, errors::ModelError> {
    if password_hash.trim().is_empty() {
        return Err(ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password: Set(password_hash),
        telefone: Set(telefone),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(db_err)
}

/// Exact, case-sensitive email lookup.
pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, ModelError> {
    Entity::find().filter(Column::Email.eq(email)).one(db).await.map_err(db_err)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(db_err)
}

/// Unfiltered scan in storage order.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find().all(db).await.map_err(db_err)
}

/// Write only the columns present in `changes`. The row is locked for the
/// duration of the surrounding transaction, if any.
pub async fn update_fields<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    changes: ClientChanges,
) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).lock_exclusive().one(db).await.map_err(db_err)? else {
        return Ok(None);
    };
    if changes.is_empty() {
        return Ok(Some(found));
    }
    let mut am: ActiveModel = found.into();
    if let Some(name) = changes.name { am.name = Set(name); }
    if let Some(email) = changes.email { am.email = Set(email); }
    if let Some(hash) = changes.password_hash { am.password = Set(hash); }
    if let Some(telefone) = changes.telefone { am.telefone = Set(telefone); }
    let updated = am.update(db).await.map_err(db_err)?;
    Ok(Some(updated))
}

/// Remove the row. Returns `false` when nothing matched.
pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    Ok(res.rows_affected > 0)
}
