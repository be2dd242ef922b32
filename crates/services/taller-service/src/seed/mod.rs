//! Demo data seeding.
//!
//! Everything is created through the services, so generated rows pass the
//! same validation and uniqueness checks as API requests.

mod factory;

use std::sync::Arc;

use futures::future::join_all;
use thiserror::Error;
use uuid::Uuid;

use common::AppError;

use crate::service::{AuthService, ClienteService, VehiculoService};

pub use factory::{Factory, FactoryError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("generating data: {0}")]
    Factory(#[from] FactoryError),

    #[error("storing data: {0}")]
    App(#[from] AppError),

    #[error("gave up after {0} rows collided with stored data")]
    TooManyRedraws(usize),
}

/// Rows already stored by an earlier run with the same seed are skipped and
/// drawn again, up to this many per run.
const MAX_REDRAWS: usize = 10_000;

#[derive(Debug, Default)]
struct Redraws(usize);

impl Redraws {
    fn record(&mut self, field: &str) -> Result<(), SeedError> {
        self.0 += 1;
        tracing::debug!(%field, redraws = self.0, "Seed row already stored, drawing another");
        if self.0 > MAX_REDRAWS {
            return Err(SeedError::TooManyRedraws(MAX_REDRAWS));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub clientes: usize,
    pub seed: u64,
    pub admin: Option<AdminAccount>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    pub clientes: usize,
    pub vehiculos: usize,
}

pub struct Seeder {
    clientes: Arc<dyn ClienteService>,
    vehiculos: Arc<dyn VehiculoService>,
    auth: Arc<dyn AuthService>,
}

impl Seeder {
    pub fn new(
        clientes: Arc<dyn ClienteService>,
        vehiculos: Arc<dyn VehiculoService>,
        auth: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            clientes,
            vehiculos,
            auth,
        }
    }

    pub async fn run(&self, options: &SeedOptions) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();

        if let Some(admin) = &options.admin {
            report.admin_created = self.seed_admin(admin).await?;
        }

        let mut factory = Factory::new(options.seed);
        let mut redraws = Redraws::default();
        while report.clientes < options.clientes {
            let cliente = match self.clientes.create_cliente(factory.cliente()?).await {
                Ok(cliente) => cliente,
                Err(AppError::Conflict(field)) => {
                    redraws.record(&field)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let count = factory.vehiculo_count();
            self.seed_vehiculos(&mut factory, &mut redraws, cliente.id, count)
                .await?;

            report.clientes += 1;
            report.vehiculos += count;
        }

        tracing::info!(
            clientes = report.clientes,
            vehiculos = report.vehiculos,
            seed = options.seed,
            "Seeding finished"
        );
        Ok(report)
    }

    /// Create `count` vehiculos for `cliente_id`, redrawing any whose plate is taken.
    async fn seed_vehiculos(
        &self,
        factory: &mut Factory,
        redraws: &mut Redraws,
        cliente_id: Uuid,
        count: usize,
    ) -> Result<(), SeedError> {
        let mut pending = count;
        while pending > 0 {
            let batch = (0..pending)
                .map(|_| factory.vehiculo(cliente_id))
                .collect::<Result<Vec<_>, _>>()?;
            let results =
                join_all(batch.into_iter().map(|data| self.vehiculos.create_vehiculo(data))).await;

            pending = 0;
            for result in results {
                match result {
                    Ok(_) => {}
                    Err(AppError::Conflict(field)) => {
                        redraws.record(&field)?;
                        pending += 1;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(())
    }

    /// Register the operator account unless the email is already taken.
    async fn seed_admin(&self, admin: &AdminAccount) -> Result<bool, SeedError> {
        match self
            .auth
            .register(
                admin.name.clone(),
                admin.email.clone(),
                admin.password.clone(),
            )
            .await
        {
            Ok(user) => {
                tracing::info!(email = %user.email, "Operator account created");
                Ok(true)
            }
            Err(AppError::Conflict(_)) => {
                tracing::info!(email = %admin.email, "Operator account already exists");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}
