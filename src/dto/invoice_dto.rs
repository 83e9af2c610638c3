use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Invoice, InvoiceSummary, InvoiceWithCompany};
use crate::utils::validation::{validate_not_blank, validate_positive_amount};

// Request para crear una invoice; `amt` acepta número o string numérico
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[validate(custom = "validate_not_blank")]
    pub comp_code: String,
    #[validate(custom = "validate_positive_amount")]
    pub amt: Decimal,
}

// Request para actualizar una invoice
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInvoiceRequest {
    #[validate(custom = "validate_positive_amount")]
    pub amt: Decimal,
    pub paid: bool,
}

#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Debug, Serialize)]
pub struct InvoiceCompany {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub company: InvoiceCompany,
    #[serde(with = "rust_decimal::serde::float")]
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

impl From<InvoiceWithCompany> for InvoiceDetail {
    fn from(row: InvoiceWithCompany) -> Self {
        Self {
            id: row.id,
            company: InvoiceCompany {
                code: row.comp_code,
                name: row.name,
                description: row.description,
            },
            amt: row.amt,
            paid: row.paid,
            add_date: row.add_date,
            paid_date: row.paid_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceDetail,
}
