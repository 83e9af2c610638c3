//! Conexión a PostgreSQL
//!
//! Envuelve el `PgPool` compartido por los repositorios: creación,
//! comprobación de salud, cierre ordenado y reseteo del schema.

use sqlx::{Executor, PgPool};

use crate::config::DatabaseConfig;

/// DDL de referencia de BizTime
pub const SCHEMA_SQL: &str = include_str!("../../schema/biztime.sql");

#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool y verificar que la base de datos responde
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        tracing::info!(url = %mask_database_url(&config.url), "🔌 Conectando a PostgreSQL");

        let pool = config.create_pool().await?;
        let connection = Self { pool };
        connection.health_check().await?;

        tracing::info!(
            max_connections = config.max_connections,
            "✅ Conexión a PostgreSQL establecida"
        );
        Ok(connection)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Verificar que la conexión funciona
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Borra y recrea todas las tablas a partir de `SCHEMA_SQL`.
    pub async fn reset_schema(&self) -> Result<(), sqlx::Error> {
        self.pool.execute(SCHEMA_SQL).await?;
        Ok(())
    }

    /// Cierra el pool esperando a que se devuelvan las conexiones en uso
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("🔌 Pool de PostgreSQL cerrado");
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    if at_pos < scheme_end {
        return url.to_string();
    }

    let protocol = &url[..scheme_end + 3];
    let host = &url[at_pos + 1..];
    format!("{}***:***@{}", protocol, host)
}
