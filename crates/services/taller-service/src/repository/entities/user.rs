//! Operator account table.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(m: Model) -> Self {
        User {
            id: m.id,
            name: m.name,
            email: m.email,
            password_hash: m.password_hash,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<User> for ActiveModel {
    fn from(u: User) -> Self {
        ActiveModel {
            id: Set(u.id),
            name: Set(u.name),
            email: Set(u.email),
            password_hash: Set(u.password_hash),
            created_at: Set(u.created_at),
            updated_at: Set(u.updated_at),
        }
    }
}
