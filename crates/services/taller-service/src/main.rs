//! Taller service entry point.

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taller_service_lib::config::TallerConfig;
use taller_service_lib::seed::{AdminAccount, SeedOptions};
use taller_service_lib::{BoxError, MigrateAction};

use crate::cli::{Cli, Commands, MigrateCommand};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), BoxError> {
    let mut config = TallerConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Serve(args) => {
            if let Some(host) = args.host {
                config.service.host = host;
            }
            if let Some(port) = args.port {
                config.service.port = port;
            }
            taller_service_lib::run_server(config).await
        }
        Commands::Migrate { action } => {
            let action = match action {
                MigrateCommand::Up => MigrateAction::Up,
                MigrateCommand::Down => MigrateAction::Down,
                MigrateCommand::Status => MigrateAction::Status,
                MigrateCommand::Fresh => MigrateAction::Fresh,
            };
            taller_service_lib::run_migrations(&config, action).await
        }
        Commands::Seed(args) => {
            let admin = (!args.no_admin).then(|| AdminAccount {
                name: "Admin".to_string(),
                email: args.admin_email,
                password: args.admin_password,
            });
            let report = taller_service_lib::run_seed(
                &config,
                SeedOptions {
                    clientes: args.clientes,
                    seed: args.seed,
                    admin,
                },
            )
            .await?;
            println!(
                "Seeded {} clientes and {} vehiculos",
                report.clientes, report.vehiculos
            );
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
