//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del pool de conexiones PostgreSQL con SQLx.

use std::env;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{env_or, ConfigError, EnvironmentConfig};

pub const DEFAULT_DATABASE_URL: &str = "postgresql:///biztime";
pub const DEFAULT_TEST_DATABASE_URL: &str = "postgresql:///biztime_test";

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }
}

impl DatabaseConfig {
    /// En `ENVIRONMENT=test` se usa `DATABASE_TEST_URL` en lugar de `DATABASE_URL`.
    pub fn from_env(environment: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let url = if environment.is_test() {
            env::var("DATABASE_TEST_URL").unwrap_or_else(|_| DEFAULT_TEST_DATABASE_URL.to_string())
        } else {
            env::var("DATABASE_URL").unwrap_or(defaults.url)
        };

        let acquire_secs = env_or(
            "DB_ACQUIRE_TIMEOUT_SECS",
            defaults.acquire_timeout.as_secs(),
            "a number of seconds",
        )?;

        Ok(Self {
            url,
            max_connections: env_or("DB_MAX_CONNECTIONS", defaults.max_connections, "a positive integer")?,
            min_connections: env_or("DB_MIN_CONNECTIONS", defaults.min_connections, "a positive integer")?,
            acquire_timeout: Duration::from_secs(acquire_secs),
            ..defaults
        })
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }
}
