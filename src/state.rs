//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::{EnvironmentConfig, StorageBackend};
use crate::database::DatabaseConnection;
use crate::repositories::{
    CompanyRepository, InMemoryStore, IndustryRepository, InvoiceRepository,
    PgCompanyRepository, PgIndustryRepository, PgInvoiceRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    /// `None` con el backend en memoria
    pub database: Option<DatabaseConnection>,
    pub companies: Arc<dyn CompanyRepository>,
    pub industries: Arc<dyn IndustryRepository>,
    pub invoices: Arc<dyn InvoiceRepository>,
}

impl AppState {
    pub fn postgres(database: DatabaseConnection, config: EnvironmentConfig) -> Self {
        let pool = database.pool().clone();

        Self {
            config,
            companies: Arc::new(PgCompanyRepository::new(pool.clone())),
            industries: Arc::new(PgIndustryRepository::new(pool.clone())),
            invoices: Arc::new(PgInvoiceRepository::new(pool)),
            database: Some(database),
        }
    }

    pub fn in_memory(config: EnvironmentConfig) -> Self {
        let store = InMemoryStore::new();

        Self {
            config,
            database: None,
            companies: Arc::new(store.clone()),
            industries: Arc::new(store.clone()),
            invoices: Arc::new(store),
        }
    }

    pub fn storage(&self) -> StorageBackend {
        if self.database.is_some() {
            StorageBackend::Postgres
        } else {
            StorageBackend::Memory
        }
    }
}
