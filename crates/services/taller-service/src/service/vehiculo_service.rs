//! Vehiculo use cases.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{Cliente, Vehiculo, VehiculoData, VehiculoWithCliente};

use crate::repository::{ClienteRepository, VehiculoRepository};

/// Rejection when `cliente_id` names no cliente.
const INVALID_CLIENTE_MESSAGE: &str = "The selected cliente id is invalid.";

#[async_trait]
pub trait VehiculoService: Send + Sync {
    /// Every vehiculo with its owner
    async fn list_vehiculos(&self) -> AppResult<Vec<VehiculoWithCliente>>;

    async fn get_vehiculo(&self, id: Uuid) -> AppResult<VehiculoWithCliente>;

    /// Create a vehiculo for an existing cliente. `placa` must be unused.
    async fn create_vehiculo(&self, data: VehiculoData) -> AppResult<Vehiculo>;

    async fn update_vehiculo(&self, id: Uuid, data: VehiculoData) -> AppResult<Vehiculo>;

    async fn delete_vehiculo(&self, id: Uuid) -> AppResult<()>;
}

pub struct VehiculoManager {
    vehiculos: Arc<dyn VehiculoRepository>,
    clientes: Arc<dyn ClienteRepository>,
}

impl VehiculoManager {
    pub fn new(vehiculos: Arc<dyn VehiculoRepository>, clientes: Arc<dyn ClienteRepository>) -> Self {
        Self {
            vehiculos,
            clientes,
        }
    }

    async fn check(&self, data: &VehiculoData, current: Option<Uuid>) -> AppResult<()> {
        if self.clientes.find_by_id(data.cliente_id).await?.is_none() {
            return Err(AppError::validation(INVALID_CLIENTE_MESSAGE));
        }

        let placa_owner = self.vehiculos.find_by_placa(&data.placa).await?;
        if placa_owner.is_some_and(|v| Some(v.id) != current) {
            return Err(AppError::conflict("Placa"));
        }

        Ok(())
    }
}

#[async_trait]
impl VehiculoService for VehiculoManager {
    async fn list_vehiculos(&self) -> AppResult<Vec<VehiculoWithCliente>> {
        let vehiculos = self.vehiculos.list().await?;
        let owners: HashMap<Uuid, Cliente> = self
            .clientes
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(vehiculos
            .into_iter()
            .map(|vehiculo| VehiculoWithCliente {
                cliente: owners.get(&vehiculo.cliente_id).cloned(),
                vehiculo,
            })
            .collect())
    }

    async fn get_vehiculo(&self, id: Uuid) -> AppResult<VehiculoWithCliente> {
        let vehiculo = self.vehiculos.find_by_id(id).await?.ok_or_not_found()?;
        let cliente = self.clientes.find_by_id(vehiculo.cliente_id).await?;

        Ok(VehiculoWithCliente { vehiculo, cliente })
    }

    async fn create_vehiculo(&self, data: VehiculoData) -> AppResult<Vehiculo> {
        self.check(&data, None).await?;

        let vehiculo = self.vehiculos.create(Vehiculo::new(data)).await?;
        tracing::info!(vehiculo_id = %vehiculo.id, cliente_id = %vehiculo.cliente_id, "Vehiculo created");
        Ok(vehiculo)
    }

    async fn update_vehiculo(&self, id: Uuid, data: VehiculoData) -> AppResult<Vehiculo> {
        let mut vehiculo = self.vehiculos.find_by_id(id).await?.ok_or_not_found()?;
        self.check(&data, Some(id)).await?;

        vehiculo.apply(data);
        let vehiculo = self.vehiculos.update(vehiculo).await?;
        tracing::info!(vehiculo_id = %vehiculo.id, "Vehiculo updated");
        Ok(vehiculo)
    }

    async fn delete_vehiculo(&self, id: Uuid) -> AppResult<()> {
        self.vehiculos.delete(id).await?;
        tracing::info!(vehiculo_id = %id, "Vehiculo deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ClienteData, DniCode};
    use mockall::predicate::eq;

    use crate::repository::{MockClienteRepository, MockVehiculoRepository};

    fn cliente() -> Cliente {
        Cliente::new(ClienteData {
            nombre: "Ana García".to_string(),
            email: "ana@example.com".to_string(),
            telefono: "612345678".to_string(),
            dni: DniCode::generate(12_345_678).unwrap(),
        })
    }

    fn data(cliente_id: Uuid, placa: &str) -> VehiculoData {
        VehiculoData {
            marca: "Honda".to_string(),
            modelo: "Civic".to_string(),
            color: "silver".to_string(),
            placa: placa.to_string(),
            anio: 2012,
            kilometraje: 98_000,
            cliente_id,
        }
    }

    fn manager(vehiculos: MockVehiculoRepository, clientes: MockClienteRepository) -> VehiculoManager {
        VehiculoManager::new(Arc::new(vehiculos), Arc::new(clientes))
    }

    #[tokio::test]
    async fn create_for_existing_cliente() {
        let owner = cliente();
        let owner_id = owner.id;

        let mut clientes = MockClienteRepository::new();
        clientes
            .expect_find_by_id()
            .with(eq(owner_id))
            .returning(move |_| Ok(Some(owner.clone())));
        let mut vehiculos = MockVehiculoRepository::new();
        vehiculos.expect_find_by_placa().returning(|_| Ok(None));
        vehiculos.expect_create().returning(Ok);

        let created = manager(vehiculos, clientes)
            .create_vehiculo(data(owner_id, "1234-BCD"))
            .await
            .unwrap();

        assert_eq!(created.cliente_id, owner_id);
        assert_eq!(created.placa, "1234-BCD");
    }

    #[tokio::test]
    async fn create_rejects_unknown_cliente() {
        let mut clientes = MockClienteRepository::new();
        clientes.expect_find_by_id().returning(|_| Ok(None));
        let mut vehiculos = MockVehiculoRepository::new();
        vehiculos.expect_create().never();

        let result = manager(vehiculos, clientes)
            .create_vehiculo(data(Uuid::new_v4(), "1234-BCD"))
            .await;

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, INVALID_CLIENTE_MESSAGE),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_rejects_taken_placa() {
        let owner = cliente();
        let owner_id = owner.id;

        let mut clientes = MockClienteRepository::new();
        clientes
            .expect_find_by_id()
            .returning(move |_| Ok(Some(owner.clone())));
        let mut vehiculos = MockVehiculoRepository::new();
        vehiculos
            .expect_find_by_placa()
            .returning(move |placa| Ok(Some(Vehiculo::new(data(owner_id, placa)))));
        vehiculos.expect_create().never();

        let result = manager(vehiculos, clientes)
            .create_vehiculo(data(owner_id, "1234-BCD"))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(ref e)) if e == "Placa"));
    }

    #[tokio::test]
    async fn update_keeps_own_placa() {
        let owner = cliente();
        let owner_id = owner.id;
        let existing = Vehiculo::new(data(owner_id, "1234-BCD"));
        let id = existing.id;

        let mut clientes = MockClienteRepository::new();
        clientes
            .expect_find_by_id()
            .returning(move |_| Ok(Some(owner.clone())));
        let mut vehiculos = MockVehiculoRepository::new();
        let found = existing.clone();
        vehiculos
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(found.clone())));
        vehiculos
            .expect_find_by_placa()
            .returning(move |_| Ok(Some(existing.clone())));
        vehiculos.expect_update().returning(Ok);

        let updated = manager(vehiculos, clientes)
            .update_vehiculo(
                id,
                VehiculoData {
                    kilometraje: 120_000,
                    ..data(owner_id, "1234-BCD")
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.kilometraje, 120_000);
    }

    #[tokio::test]
    async fn list_attaches_owner() {
        let owner = cliente();
        let owner_id = owner.id;
        let orphan_owner = Uuid::new_v4();

        let mut clientes = MockClienteRepository::new();
        clientes
            .expect_list()
            .returning(move || Ok(vec![owner.clone()]));
        let mut vehiculos = MockVehiculoRepository::new();
        vehiculos.expect_list().returning(move || {
            Ok(vec![
                Vehiculo::new(data(owner_id, "0001-BBB")),
                Vehiculo::new(data(orphan_owner, "0002-BBB")),
            ])
        });

        let listed = manager(vehiculos, clientes).list_vehiculos().await.unwrap();

        assert_eq!(listed[0].cliente.as_ref().map(|c| c.id), Some(owner_id));
        assert!(listed[1].cliente.is_none());
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let mut vehiculos = MockVehiculoRepository::new();
        vehiculos.expect_find_by_id().returning(|_| Ok(None));

        let result = manager(vehiculos, MockClienteRepository::new())
            .get_vehiculo(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
