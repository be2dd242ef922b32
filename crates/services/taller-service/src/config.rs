//! Taller service configuration, loaded from the environment.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use common::{DatabaseConfig, JwtConfig, ServiceConfig};
use domain::{DEFAULT_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH};

const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";
const DEFAULT_TRANSLATIONS_PATH: &str = "resources/lang/translations.json";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET environment variable must be set in production")]
    MissingJwtSecret,

    #[error("JWT_SECRET must be at least {0} characters long")]
    ShortJwtSecret(usize),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Everything the service needs at runtime.
#[derive(Debug, Clone)]
pub struct TallerConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub translations_path: PathBuf,
}

impl TallerConfig {
    /// Load from process environment variables.
    ///
    /// Reads `DATABASE_URL`, `TALLER_HOST`, `TALLER_PORT`, `JWT_SECRET`,
    /// `JWT_EXPIRATION_HOURS` and `TRANSLATIONS_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) => secret,
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            None => return Err(ConfigError::MissingJwtSecret),
        };
        if jwt_secret.chars().count() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::ShortJwtSecret(MIN_JWT_SECRET_LENGTH));
        }

        let defaults = ServiceConfig::default();
        let service = ServiceConfig {
            host: lookup("TALLER_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "TALLER_PORT", defaults.port)?,
            ..defaults
        };

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").unwrap_or_else(|| DatabaseConfig::default().url),
            ..DatabaseConfig::default()
        };

        let jwt = JwtConfig {
            secret: jwt_secret,
            expiration_hours: parse_or(&lookup, "JWT_EXPIRATION_HOURS", DEFAULT_JWT_EXPIRATION_HOURS)?,
        };

        let translations_path = lookup("TRANSLATIONS_PATH")
            .unwrap_or_else(|| DEFAULT_TRANSLATIONS_PATH.to_string())
            .into();

        Ok(Self {
            service,
            database,
            jwt,
            translations_path,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
