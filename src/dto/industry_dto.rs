use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{CompanyIndustry, Industry};
use crate::utils::validation::validate_not_blank;

// Request para crear una industry
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIndustryRequest {
    #[validate(custom = "validate_not_blank")]
    pub industry: String,
}

// Request para asociar una company a una industry
#[derive(Debug, Deserialize, Validate)]
pub struct AssociateCompanyRequest {
    #[validate(custom = "validate_not_blank")]
    pub company_code: String,
}

#[derive(Debug, Serialize)]
pub struct IndustryListResponse {
    pub industries: Vec<Industry>,
}

#[derive(Debug, Serialize)]
pub struct IndustryResponse {
    pub industry: Industry,
}

#[derive(Debug, Serialize)]
pub struct IndustryDetail {
    pub code: String,
    pub industry: String,
    pub companies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct IndustryDetailResponse {
    pub industry: IndustryDetail,
}

#[derive(Debug, Serialize)]
pub struct AssociationResponse {
    pub industry: CompanyIndustry,
}
