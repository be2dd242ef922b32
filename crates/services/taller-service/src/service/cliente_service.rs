//! Cliente use cases.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{Cliente, ClienteData, ClienteWithVehiculos, Vehiculo};

use crate::repository::{ClienteRepository, VehiculoRepository};

#[async_trait]
pub trait ClienteService: Send + Sync {
    /// Every cliente with the vehiculos it owns
    async fn list_clientes(&self) -> AppResult<Vec<ClienteWithVehiculos>>;

    async fn get_cliente(&self, id: Uuid) -> AppResult<ClienteWithVehiculos>;

    /// Create a cliente. Email and DNI must not belong to another cliente.
    async fn create_cliente(&self, data: ClienteData) -> AppResult<Cliente>;

    async fn update_cliente(&self, id: Uuid, data: ClienteData) -> AppResult<Cliente>;

    /// Delete a cliente and, through the foreign key, its vehiculos
    async fn delete_cliente(&self, id: Uuid) -> AppResult<()>;
}

pub struct ClienteManager {
    clientes: Arc<dyn ClienteRepository>,
    vehiculos: Arc<dyn VehiculoRepository>,
}

impl ClienteManager {
    pub fn new(clientes: Arc<dyn ClienteRepository>, vehiculos: Arc<dyn VehiculoRepository>) -> Self {
        Self {
            clientes,
            vehiculos,
        }
    }

    /// Reject `data` if its email or DNI is taken by a cliente other than `current`.
    async fn ensure_unique(&self, data: &ClienteData, current: Option<Uuid>) -> AppResult<()> {
        let taken_by_other = |found: Option<Cliente>| found.is_some_and(|c| Some(c.id) != current);

        if taken_by_other(self.clientes.find_by_email(&data.email).await?) {
            return Err(AppError::conflict("Email"));
        }
        if taken_by_other(self.clientes.find_by_dni(&data.dni.to_string()).await?) {
            return Err(AppError::conflict("DNI"));
        }

        Ok(())
    }
}

#[async_trait]
impl ClienteService for ClienteManager {
    async fn list_clientes(&self) -> AppResult<Vec<ClienteWithVehiculos>> {
        let clientes = self.clientes.list().await?;
        let ids: Vec<Uuid> = clientes.iter().map(|c| c.id).collect();

        let mut owned: HashMap<Uuid, Vec<Vehiculo>> = HashMap::new();
        for vehiculo in self.vehiculos.list_by_clientes(&ids).await? {
            owned.entry(vehiculo.cliente_id).or_default().push(vehiculo);
        }

        Ok(clientes
            .into_iter()
            .map(|cliente| ClienteWithVehiculos {
                vehiculos: owned.remove(&cliente.id).unwrap_or_default(),
                cliente,
            })
            .collect())
    }

    async fn get_cliente(&self, id: Uuid) -> AppResult<ClienteWithVehiculos> {
        let cliente = self.clientes.find_by_id(id).await?.ok_or_not_found()?;
        let vehiculos = self.vehiculos.list_by_cliente(id).await?;

        Ok(ClienteWithVehiculos { cliente, vehiculos })
    }

    async fn create_cliente(&self, data: ClienteData) -> AppResult<Cliente> {
        self.ensure_unique(&data, None).await?;

        let cliente = self.clientes.create(Cliente::new(data)).await?;
        tracing::info!(cliente_id = %cliente.id, "Cliente created");
        Ok(cliente)
    }

    async fn update_cliente(&self, id: Uuid, data: ClienteData) -> AppResult<Cliente> {
        let mut cliente = self.clientes.find_by_id(id).await?.ok_or_not_found()?;
        self.ensure_unique(&data, Some(id)).await?;

        cliente.apply(data);
        let cliente = self.clientes.update(cliente).await?;
        tracing::info!(cliente_id = %cliente.id, "Cliente updated");
        Ok(cliente)
    }

    async fn delete_cliente(&self, id: Uuid) -> AppResult<()> {
        self.clientes.delete(id).await?;
        tracing::info!(cliente_id = %id, "Cliente deleted");
        Ok(())
    }
}
