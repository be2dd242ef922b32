//! Taller service library
//!
//! HTTP backend for an auto-repair shop: clientes, their vehiculos and the
//! operator accounts that manage them. The binary in `main.rs` is a thin
//! CLI over the entry points below.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod seed;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::TallerConfig;
use crate::infra::Database;
use crate::repository::{ClienteStore, UserStore, VehiculoStore};
use crate::seed::{SeedOptions, SeedReport, Seeder};
use crate::service::{Authenticator, ClienteManager, TranslationStore, VehiculoManager};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Wire repositories and services over an open database.
pub fn build_state(db: &Database, config: &TallerConfig) -> AppState {
    let conn = db.get_connection();
    let cliente_repo = Arc::new(ClienteStore::new(conn.clone()));
    let vehiculo_repo = Arc::new(VehiculoStore::new(conn.clone()));
    let user_repo = Arc::new(UserStore::new(conn));

    AppState {
        clientes: Arc::new(ClienteManager::new(cliente_repo.clone(), vehiculo_repo.clone())),
        vehiculos: Arc::new(VehiculoManager::new(vehiculo_repo, cliente_repo)),
        auth: Arc::new(Authenticator::new(user_repo, config.jwt.clone())),
        translations: Arc::new(TranslationStore::new(config.translations_path.clone())),
        health: Arc::new(db.clone()),
    }
}

/// Connect, migrate and serve HTTP until the process is stopped.
pub async fn run_server(config: TallerConfig) -> Result<(), BoxError> {
    let db = Database::connect(&config.database).await?;
    let app = create_router(build_state(&db, &config));

    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!("{} listening on {}", config.service.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run a migration command.
pub async fn run_migrations(config: &TallerConfig, action: MigrateAction) -> Result<(), BoxError> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Fill the database with demo data.
pub async fn run_seed(config: &TallerConfig, options: SeedOptions) -> Result<SeedReport, BoxError> {
    let db = Database::connect(&config.database).await?;
    let state = build_state(&db, config);

    let seeder = Seeder::new(state.clientes, state.vehiculos, state.auth);
    Ok(seeder.run(&options).await?)
}
