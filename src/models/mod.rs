//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL (`schema/biztime.sql`).

pub mod company;
pub mod industry;
pub mod invoice;

pub use company::{Company, CompanySummary};
pub use industry::{CompanyIndustry, Industry};
pub use invoice::{Invoice, InvoiceSummary, InvoiceWithCompany};
