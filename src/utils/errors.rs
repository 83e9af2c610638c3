//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores de la API y su conversión a
//! respuestas HTTP con el cuerpo uniforme `{ "message": ..., "status": ... }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Violación de clave foránea, CHECK o NOT NULL reportada por el datastore.
    #[error("{0}")]
    Constraint(String),

    #[error("{0}")]
    Database(sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Constraint(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return AppError::Conflict(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
                return AppError::Constraint(db_err.message().to_string());
            }
            // not_null_violation y numeric_value_out_of_range
            if matches!(db_err.code().as_deref(), Some("23502") | Some("22003")) {
                return AppError::Constraint(db_err.message().to_string());
            }
        }
        AppError::Database(err)
    }
}

/// Respuesta de error para la API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "❌ Error procesando la petición");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "⚠️ Petición rechazada");
        }

        let body = ErrorResponse {
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("No such {}: {}", resource, id))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, id: impl std::fmt::Display) -> AppError {
    AppError::Conflict(format!("{} already exists: {}", resource, id))
}

/// Reemplaza el mensaje del datastore por uno legible cuando el error es un
/// conflicto de clave primaria; el resto de errores se propaga intacto.
pub fn on_conflict(err: sqlx::Error, resource: &str, id: &str) -> AppError {
    match AppError::from(err) {
        AppError::Conflict(_) => conflict_error(resource, id),
        other => other,
    }
}
