use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::dto::invoice_dto::{
    CreateInvoiceRequest, InvoiceDetailResponse, InvoiceListResponse, InvoiceResponse,
    UpdateInvoiceRequest,
};
use crate::dto::StatusResponse;
use crate::repositories::InvoiceRepository;
use crate::utils::errors::{not_found_error, AppResult};

/// Fecha local del servidor, usada para `add_date` y `paid_date`.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Interpreta el segmento `:id` de la ruta; un id no numérico no puede
/// corresponder a ninguna invoice.
pub fn parse_invoice_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| not_found_error("invoice", raw))
}

pub struct InvoiceController {
    repository: Arc<dyn InvoiceRepository>,
}

impl InvoiceController {
    pub fn new(repository: Arc<dyn InvoiceRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<InvoiceListResponse> {
        let invoices = self.repository.list_all().await?;
        Ok(InvoiceListResponse { invoices })
    }

    pub async fn get(&self, id: i32) -> AppResult<InvoiceDetailResponse> {
        let row = self
            .repository
            .find_with_company(id)
            .await?
            .ok_or_else(|| not_found_error("invoice", id))?;

        Ok(InvoiceDetailResponse {
            invoice: row.into(),
        })
    }

    pub async fn create(&self, request: CreateInvoiceRequest) -> AppResult<InvoiceResponse> {
        let invoice = self
            .repository
            .create(&request.comp_code, request.amt, today())
            .await?;

        tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "🧾 Invoice creada");
        Ok(InvoiceResponse { invoice })
    }

    pub async fn update(&self, id: i32, request: UpdateInvoiceRequest) -> AppResult<InvoiceResponse> {
        let invoice = self
            .repository
            .update(id, request.amt, request.paid, today())
            .await?
            .ok_or_else(|| not_found_error("invoice", id))?;

        Ok(InvoiceResponse { invoice })
    }

    pub async fn delete(&self, id: i32) -> AppResult<StatusResponse> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("invoice", id));
        }

        tracing::info!(id, "🗑️ Invoice eliminada");
        Ok(StatusResponse::deleted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    #[test]
    fn test_parse_invoice_id() {
        assert_eq!(parse_invoice_id("42").unwrap(), 42);

        let err = parse_invoice_id("abc").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "No such invoice: abc");
    }
}
