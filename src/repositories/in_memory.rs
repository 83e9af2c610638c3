//! Implementación en memoria de los repositorios
//!
//! Pensada para tests y desarrollo local (`STORAGE_BACKEND=memory`).
//! Reproduce las restricciones de `schema/biztime.sql`: claves primarias,
//! claves foráneas, `NUMERIC(12,2)` y `ON DELETE CASCADE`.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tokio::sync::RwLock;

use crate::models::invoice::next_paid_date;
use crate::models::{
    Company, CompanyIndustry, CompanySummary, Industry, Invoice, InvoiceSummary,
    InvoiceWithCompany,
};
use crate::repositories::{CompanyRepository, IndustryRepository, InvoiceRepository};
use crate::utils::errors::{conflict_error, AppError, AppResult};

#[derive(Debug, Default)]
struct Tables {
    companies: BTreeMap<String, Company>,
    industries: BTreeMap<String, Industry>,
    companies_industries: BTreeSet<CompanyIndustry>,
    invoices: BTreeMap<i32, Invoice>,
    last_invoice_id: i32,
}

fn foreign_key_violation(table: &str, constraint: &str) -> AppError {
    AppError::Constraint(format!(
        "insert or update on table \"{}\" violates foreign key constraint \"{}\"",
        table, constraint
    ))
}

/// Ajusta `amt` a `NUMERIC(12,2)` con el redondeo de PostgreSQL y aplica
/// el CHECK `amt > 0` sobre el valor ya redondeado.
fn to_stored_amount(amt: Decimal) -> AppResult<Decimal> {
    let rounded = amt.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    if rounded.abs() >= Decimal::new(10_000_000_000, 0) {
        return Err(AppError::Constraint("numeric field overflow".to_string()));
    }
    if rounded <= Decimal::ZERO {
        return Err(AppError::Constraint(
            "new row for relation \"invoices\" violates check constraint \"invoices_amt_check\""
                .to_string(),
        ));
    }
    Ok(rounded)
}

/// Almacén en memoria compartido por los tres repositorios
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn list_all(&self) -> AppResult<Vec<CompanySummary>> {
        let tables = self.tables.read().await;
        Ok(tables.companies.values().map(CompanySummary::from).collect())
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Company>> {
        let tables = self.tables.read().await;
        Ok(tables.companies.get(code).cloned())
    }

    async fn industry_names(&self, code: &str) -> AppResult<Vec<String>> {
        let tables = self.tables.read().await;
        let mut names: Vec<String> = tables
            .companies_industries
            .iter()
            .filter(|link| link.comp_code == code)
            .filter_map(|link| tables.industries.get(&link.indus_code))
            .map(|industry| industry.industry.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn create(&self, company: &Company) -> AppResult<Company> {
        let mut tables = self.tables.write().await;

        if tables.companies.contains_key(&company.code) {
            return Err(conflict_error("Company", &company.code));
        }

        tables
            .companies
            .insert(company.code.clone(), company.clone());
        Ok(company.clone())
    }

    async fn update(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Option<Company>> {
        let mut tables = self.tables.write().await;

        let updated = tables.companies.get_mut(code).map(|company| {
            company.name = name.to_string();
            company.description = description.map(str::to_string);
            company.clone()
        });
        Ok(updated)
    }

    async fn delete(&self, code: &str) -> AppResult<bool> {
        let mut tables = self.tables.write().await;

        if tables.companies.remove(code).is_none() {
            return Ok(false);
        }

        tables.invoices.retain(|_, invoice| invoice.comp_code != code);
        tables.companies_industries.retain(|link| link.comp_code != code);
        Ok(true)
    }
}

#[async_trait]
impl IndustryRepository for InMemoryStore {
    async fn list_all(&self) -> AppResult<Vec<Industry>> {
        let tables = self.tables.read().await;
        Ok(tables.industries.values().cloned().collect())
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Industry>> {
        let tables = self.tables.read().await;
        Ok(tables.industries.get(code).cloned())
    }

    async fn company_codes(&self, code: &str) -> AppResult<Vec<String>> {
        let tables = self.tables.read().await;
        Ok(tables
            .companies_industries
            .iter()
            .filter(|link| link.indus_code == code)
            .map(|link| link.comp_code.clone())
            .collect())
    }

    async fn create(&self, industry: &Industry) -> AppResult<Industry> {
        let mut tables = self.tables.write().await;

        if tables.industries.contains_key(&industry.code) {
            return Err(conflict_error("Industry", &industry.code));
        }

        tables
            .industries
            .insert(industry.code.clone(), industry.clone());
        Ok(industry.clone())
    }

    async fn associate(&self, indus_code: &str, comp_code: &str) -> AppResult<CompanyIndustry> {
        let mut tables = self.tables.write().await;

        if !tables.companies.contains_key(comp_code) {
            return Err(foreign_key_violation(
                "companies_industries",
                "companies_industries_comp_code_fkey",
            ));
        }
        if !tables.industries.contains_key(indus_code) {
            return Err(foreign_key_violation(
                "companies_industries",
                "companies_industries_indus_code_fkey",
            ));
        }

        let link = CompanyIndustry {
            comp_code: comp_code.to_string(),
            indus_code: indus_code.to_string(),
        };
        if !tables.companies_industries.insert(link.clone()) {
            return Err(conflict_error(
                "Company industry",
                format!("{}/{}", comp_code, indus_code),
            ));
        }
        Ok(link)
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryStore {
    async fn list_all(&self) -> AppResult<Vec<InvoiceSummary>> {
        let tables = self.tables.read().await;
        Ok(tables
            .invoices
            .values()
            .map(|invoice| InvoiceSummary {
                id: invoice.id,
                comp_code: invoice.comp_code.clone(),
            })
            .collect())
    }

    async fn find_with_company(&self, id: i32) -> AppResult<Option<InvoiceWithCompany>> {
        let tables = self.tables.read().await;

        let joined = tables.invoices.get(&id).and_then(|invoice| {
            tables
                .companies
                .get(&invoice.comp_code)
                .map(|company| InvoiceWithCompany {
                    id: invoice.id,
                    comp_code: invoice.comp_code.clone(),
                    amt: invoice.amt,
                    paid: invoice.paid,
                    add_date: invoice.add_date,
                    paid_date: invoice.paid_date,
                    name: company.name.clone(),
                    description: company.description.clone(),
                })
        });
        Ok(joined)
    }

    async fn create(&self, comp_code: &str, amt: Decimal, today: NaiveDate) -> AppResult<Invoice> {
        let amt = to_stored_amount(amt)?;
        let mut tables = self.tables.write().await;

        if !tables.companies.contains_key(comp_code) {
            return Err(foreign_key_violation("invoices", "invoices_comp_code_fkey"));
        }

        tables.last_invoice_id += 1;
        let invoice = Invoice {
            id: tables.last_invoice_id,
            comp_code: comp_code.to_string(),
            amt,
            paid: false,
            add_date: today,
            paid_date: None,
        };
        tables.invoices.insert(invoice.id, invoice.clone());
        Ok(invoice)
    }

    async fn update(
        &self,
        id: i32,
        amt: Decimal,
        paid: bool,
        today: NaiveDate,
    ) -> AppResult<Option<Invoice>> {
        let mut tables = self.tables.write().await;

        let Some(invoice) = tables.invoices.get_mut(&id) else {
            return Ok(None);
        };

        invoice.amt = to_stored_amount(amt)?;
        invoice.paid_date = next_paid_date(invoice.paid_date, paid, today);
        invoice.paid = paid;
        Ok(Some(invoice.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.invoices.remove(&id).is_some())
    }
}
