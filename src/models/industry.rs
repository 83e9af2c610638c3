//! Modelos de Industry y de la tabla de unión companies_industries

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::slug::slugify;

/// Industry - mapea la tabla industries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Industry {
    pub code: String,
    pub industry: String,
}

impl Industry {
    pub fn new(industry: String) -> Self {
        Self {
            code: slugify(&industry),
            industry,
        }
    }
}

/// Fila de la tabla companies_industries
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, FromRow)]
pub struct CompanyIndustry {
    pub comp_code: String,
    pub indus_code: String,
}
