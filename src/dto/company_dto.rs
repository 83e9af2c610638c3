use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Company, CompanySummary};
use crate::utils::validation::validate_not_blank;

// Request para crear o actualizar una company
#[derive(Debug, Deserialize, Validate)]
pub struct CompanyRequest {
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

// GET /companies/:code conserva `company` como lista de filas
#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    pub company: Vec<Company>,
    pub industries: Vec<String>,
}
