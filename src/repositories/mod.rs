//! Capa de acceso a datos
//!
//! Cada recurso expone un trait asíncrono con dos implementaciones:
//! PostgreSQL (`Pg*Repository`, sobre un `PgPool`) y `InMemoryStore`,
//! que reproduce las mismas restricciones de claves primarias, claves
//! foráneas y borrado en cascada.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    Company, CompanyIndustry, CompanySummary, Industry, Invoice, InvoiceSummary,
    InvoiceWithCompany,
};
use crate::utils::errors::AppResult;

pub mod company_repository;
pub mod in_memory;
pub mod industry_repository;
pub mod invoice_repository;

pub use company_repository::PgCompanyRepository;
pub use in_memory::InMemoryStore;
pub use industry_repository::PgIndustryRepository;
pub use invoice_repository::PgInvoiceRepository;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<CompanySummary>>;

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Company>>;

    /// Etiquetas de las industries asociadas a la company.
    async fn industry_names(&self, code: &str) -> AppResult<Vec<String>>;

    async fn create(&self, company: &Company) -> AppResult<Company>;

    /// `None` si no existe ninguna company con ese `code`.
    async fn update(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Option<Company>>;

    /// `false` si no existía ninguna company con ese `code`.
    async fn delete(&self, code: &str) -> AppResult<bool>;
}

#[async_trait]
pub trait IndustryRepository: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<Industry>>;

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Industry>>;

    /// Codes de las companies asociadas a la industry.
    async fn company_codes(&self, code: &str) -> AppResult<Vec<String>>;

    async fn create(&self, industry: &Industry) -> AppResult<Industry>;

    /// Inserta la fila de unión sin comprobar existencia previa: las
    /// restricciones del datastore son la única protección.
    async fn associate(&self, indus_code: &str, comp_code: &str) -> AppResult<CompanyIndustry>;
}

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Ordenadas por `id` ascendente.
    async fn list_all(&self) -> AppResult<Vec<InvoiceSummary>>;

    async fn find_with_company(&self, id: i32) -> AppResult<Option<InvoiceWithCompany>>;

    async fn create(&self, comp_code: &str, amt: Decimal, today: NaiveDate) -> AppResult<Invoice>;

    /// Lee el `paid_date` actual, decide el nuevo con
    /// [`crate::models::invoice::next_paid_date`] y escribe `amt`, `paid` y
    /// `paid_date` de forma atómica. `None` si la invoice no existe.
    async fn update(
        &self,
        id: i32,
        amt: Decimal,
        paid: bool,
        today: NaiveDate,
    ) -> AppResult<Option<Invoice>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;
}
