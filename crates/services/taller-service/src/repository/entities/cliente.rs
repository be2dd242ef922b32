//! Customer table.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Cliente;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nombre: String,
    #[sea_orm(unique)]
    pub email: String,
    pub telefono: String,
    #[sea_orm(unique)]
    pub dni: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehiculo::Entity")]
    Vehiculos,
}

impl Related<super::vehiculo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehiculos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Cliente {
    fn from(model: Model) -> Self {
        Cliente {
            id: model.id,
            nombre: model.nombre,
            email: model.email,
            telefono: model.telefono,
            dni: model.dni,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Cliente> for ActiveModel {
    fn from(cliente: Cliente) -> Self {
        ActiveModel {
            id: Set(cliente.id),
            nombre: Set(cliente.nombre),
            email: Set(cliente.email),
            telefono: Set(cliente.telefono),
            dni: Set(cliente.dni),
            created_at: Set(cliente.created_at),
            updated_at: Set(cliente.updated_at),
        }
    }
}
