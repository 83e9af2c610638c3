//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos y de entorno,
//! leída de variables de entorno (con `.env` cargado por `dotenvy`).

use thiserror::Error;

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::{EnvironmentConfig, StorageBackend};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    InvalidVar {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Lee una variable de entorno y la parsea, usando `default` si no existe.
pub(crate) fn env_or<T: std::str::FromStr>(
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidVar {
            name,
            value,
            expected,
        }),
        Err(_) => Ok(default),
    }
}
