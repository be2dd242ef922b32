//! Vehicle table. Rows are removed with their cliente.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Vehiculo;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehiculos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub marca: String,
    pub modelo: String,
    pub color: String,
    #[sea_orm(unique)]
    pub placa: String,
    pub anio: i32,
    pub kilometraje: i32,
    pub cliente_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cliente::Entity",
        from = "Column::ClienteId",
        to = "super::cliente::Column::Id",
        on_delete = "Cascade"
    )]
    Cliente,
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Vehiculo {
    fn from(model: Model) -> Self {
        Vehiculo {
            id: model.id,
            marca: model.marca,
            modelo: model.modelo,
            color: model.color,
            placa: model.placa,
            anio: model.anio,
            kilometraje: model.kilometraje,
            cliente_id: model.cliente_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Vehiculo> for ActiveModel {
    fn from(vehiculo: Vehiculo) -> Self {
        ActiveModel {
            id: Set(vehiculo.id),
            marca: Set(vehiculo.marca),
            modelo: Set(vehiculo.modelo),
            color: Set(vehiculo.color),
            placa: Set(vehiculo.placa),
            anio: Set(vehiculo.anio),
            kilometraje: Set(vehiculo.kilometraje),
            cliente_id: Set(vehiculo.cliente_id),
            created_at: Set(vehiculo.created_at),
            updated_at: Set(vehiculo.updated_at),
        }
    }
}
