//! Vehiculo repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::entities::vehiculo::{self, ActiveModel, Entity as VehiculoEntity};
use super::{write_error, UniqueColumns};
use common::{AppError, AppResult};
use domain::Vehiculo;

const UNIQUE_COLUMNS: UniqueColumns = &[("vehiculos_placa_key", "Placa")];

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VehiculoRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehiculo>>;

    async fn find_by_placa(&self, placa: &str) -> AppResult<Option<Vehiculo>>;

    async fn list(&self) -> AppResult<Vec<Vehiculo>>;

    /// Vehiculos owned by one cliente
    async fn list_by_cliente(&self, cliente_id: Uuid) -> AppResult<Vec<Vehiculo>>;

    /// Vehiculos owned by any of `cliente_ids`, in one query
    async fn list_by_clientes(&self, cliente_ids: &[Uuid]) -> AppResult<Vec<Vehiculo>>;

    async fn create(&self, vehiculo: Vehiculo) -> AppResult<Vehiculo>;

    async fn update(&self, vehiculo: Vehiculo) -> AppResult<Vehiculo>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct VehiculoStore {
    db: DatabaseConnection,
}

impl VehiculoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehiculoRepository for VehiculoStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehiculo>> {
        let result = VehiculoEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Vehiculo::from))
    }

    async fn find_by_placa(&self, placa: &str) -> AppResult<Option<Vehiculo>> {
        let result = VehiculoEntity::find()
            .filter(vehiculo::Column::Placa.eq(placa))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Vehiculo::from))
    }

    async fn list(&self) -> AppResult<Vec<Vehiculo>> {
        let models = VehiculoEntity::find()
            .order_by_asc(vehiculo::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Vehiculo::from).collect())
    }

    async fn list_by_cliente(&self, cliente_id: Uuid) -> AppResult<Vec<Vehiculo>> {
        let models = VehiculoEntity::find()
            .filter(vehiculo::Column::ClienteId.eq(cliente_id))
            .order_by_asc(vehiculo::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Vehiculo::from).collect())
    }

    async fn list_by_clientes(&self, cliente_ids: &[Uuid]) -> AppResult<Vec<Vehiculo>> {
        if cliente_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = VehiculoEntity::find()
            .filter(vehiculo::Column::ClienteId.is_in(cliente_ids.iter().copied()))
            .order_by_asc(vehiculo::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Vehiculo::from).collect())
    }

    async fn create(&self, vehiculo: Vehiculo) -> AppResult<Vehiculo> {
        let model = ActiveModel::from(vehiculo)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Vehiculo", UNIQUE_COLUMNS))?;

        Ok(Vehiculo::from(model))
    }

    async fn update(&self, vehiculo: Vehiculo) -> AppResult<Vehiculo> {
        let model = ActiveModel::from(vehiculo)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "Vehiculo", UNIQUE_COLUMNS))?;

        Ok(Vehiculo::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = VehiculoEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
