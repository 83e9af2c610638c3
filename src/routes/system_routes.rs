use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Estado del servicio y del datastore
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let database_up = match &state.database {
        Some(database) => match database.health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "❌ Health check de PostgreSQL fallido");
                false
            }
        },
        None => true,
    };

    let status = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if database_up { "ok" } else { "degraded" },
            "storage": state.storage().to_string(),
            "database": if database_up { "up" } else { "down" },
        })),
    )
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
