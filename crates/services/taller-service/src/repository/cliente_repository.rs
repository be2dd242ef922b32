//! Cliente repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::entities::cliente::{self, ActiveModel, Entity as ClienteEntity};
use super::{write_error, UniqueColumns};
use common::{AppError, AppResult};
use domain::Cliente;

/// Postgres names column-level unique keys `<table>_<column>_key`.
const UNIQUE_COLUMNS: UniqueColumns = &[("clientes_email_key", "Email"), ("clientes_dni_key", "DNI")];

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Cliente>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Cliente>>;

    /// Look up by canonical DNI
    async fn find_by_dni(&self, dni: &str) -> AppResult<Option<Cliente>>;

    /// All clientes, oldest first
    async fn list(&self) -> AppResult<Vec<Cliente>>;

    async fn create(&self, cliente: Cliente) -> AppResult<Cliente>;

    async fn update(&self, cliente: Cliente) -> AppResult<Cliente>;

    /// Delete by id; the database cascades to the cliente's vehiculos
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct ClienteStore {
    db: DatabaseConnection,
}

impl ClienteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClienteRepository for ClienteStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Cliente>> {
        let result = ClienteEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Cliente::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Cliente>> {
        let result = ClienteEntity::find()
            .filter(cliente::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Cliente::from))
    }

    async fn find_by_dni(&self, dni: &str) -> AppResult<Option<Cliente>> {
        let result = ClienteEntity::find()
            .filter(cliente::Column::Dni.eq(dni))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Cliente::from))
    }

    async fn list(&self) -> AppResult<Vec<Cliente>> {
        let models = ClienteEntity::find()
            .order_by_asc(cliente::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Cliente::from).collect())
    }

    async fn create(&self, cliente: Cliente) -> AppResult<Cliente> {
        let model = ActiveModel::from(cliente)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Cliente", UNIQUE_COLUMNS))?;

        Ok(Cliente::from(model))
    }

    async fn update(&self, cliente: Cliente) -> AppResult<Cliente> {
        let model = ActiveModel::from(cliente)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "Cliente", UNIQUE_COLUMNS))?;

        Ok(Cliente::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ClienteEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
