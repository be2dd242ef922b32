//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// Auto-repair shop backend
#[derive(Parser, Debug)]
#[command(name = "taller-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommand,
    },

    /// Create an operator account and demo clientes with vehiculos
    Seed(SeedArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, env = "TALLER_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "TALLER_PORT")]
    pub port: Option<u16>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MigrateCommand {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Number of clientes to create
    #[arg(long, default_value_t = 100)]
    pub clientes: usize,

    /// RNG seed; the same seed produces the same data
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Operator account email
    #[arg(long, default_value = "admin@example.com", env = "TALLER_ADMIN_EMAIL")]
    pub admin_email: String,

    /// Operator account password
    #[arg(long, default_value = "password", env = "TALLER_ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: String,

    /// Skip the operator account
    #[arg(long)]
    pub no_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_defaults() {
        let cli = Cli::parse_from(["taller-service", "seed"]);
        match cli.command {
            Commands::Seed(args) => {
                assert_eq!(args.clientes, 100);
                assert!(!args.no_admin);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_migrate_and_verbose() {
        let cli = Cli::parse_from(["taller-service", "migrate", "status", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Migrate {
                action: MigrateCommand::Status
            }
        ));
    }

    #[test]
    fn serve_port_flag() {
        let cli = Cli::parse_from(["taller-service", "serve", "--port", "8081"]);
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, Some(8081)),
            other => panic!("unexpected {other:?}"),
        }
    }
}
