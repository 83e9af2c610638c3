//! DTOs de entrada y salida de la API

pub mod company_dto;
pub mod industry_dto;
pub mod invoice_dto;

use serde::Serialize;

/// Respuesta de borrado: `{ "status": "deleted" }`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}
