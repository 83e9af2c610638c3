//! Modelo de Invoice
//!
//! Mapea la tabla `invoices` e incluye la regla de transición de
//! `paid_date` aplicada en cada actualización.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Invoice - mapea exactamente a la tabla invoices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// Fila reducida usada en el listado de invoices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

/// Resultado del JOIN invoices ⋈ companies
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct InvoiceWithCompany {
    pub id: i32,
    pub comp_code: String,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub name: String,
    pub description: Option<String>,
}

/// Calcula el `paid_date` que debe persistirse al actualizar una invoice.
///
/// - sin pagar y pasa a pagada: se sella con `today`
/// - `paid = false`: se limpia, sea cual sea el estado previo
/// - ya pagada y sigue pagada: se conserva la fecha existente
pub fn next_paid_date(
    current: Option<NaiveDate>,
    paid: bool,
    today: NaiveDate,
) -> Option<NaiveDate> {
    match (current, paid) {
        (None, true) => Some(today),
        (_, false) => None,
        (Some(existing), true) => Some(existing),
    }
}
