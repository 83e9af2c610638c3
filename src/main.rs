use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use biztime::config::{DatabaseConfig, EnvironmentConfig, StorageBackend};
use biztime::database::DatabaseConnection;
use biztime::{build_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("biztime=debug,tower_http=info")),
        )
        .init();

    info!("💼 BizTime API");

    let config = EnvironmentConfig::from_env()?;

    let state = match config.storage {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env(&config)?;
            let database = match DatabaseConnection::new(&db_config).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };
            AppState::postgres(database, config.clone())
        }
        StorageBackend::Memory => {
            info!("🧪 Usando almacenamiento en memoria");
            AppState::in_memory(config.clone())
        }
    };

    let database = state.database.clone();
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    let addr = listener.local_addr()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("   GET    /health");
    info!("   GET    /companies | POST /companies");
    info!("   GET    /companies/:code | PUT | DELETE");
    info!("   GET    /industries | POST /industries");
    info!("   GET    /industries/:code | POST (asociar company)");
    info!("   GET    /invoices | POST /invoices");
    info!("   GET    /invoices/:id | PUT | DELETE");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
    }

    if let Some(database) = database {
        database.close().await;
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
