use std::sync::Arc;

use crate::dto::company_dto::{
    CompanyDetailResponse, CompanyListResponse, CompanyRequest, CompanyResponse,
};
use crate::dto::StatusResponse;
use crate::models::Company;
use crate::repositories::CompanyRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct CompanyController {
    repository: Arc<dyn CompanyRepository>,
}

impl CompanyController {
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<CompanyListResponse> {
        let companies = self.repository.list_all().await?;
        Ok(CompanyListResponse { companies })
    }

    pub async fn get(&self, code: &str) -> AppResult<CompanyDetailResponse> {
        let company = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found_error("company", code))?;

        let industries = self.repository.industry_names(code).await?;

        Ok(CompanyDetailResponse {
            company: vec![company],
            industries,
        })
    }

    pub async fn create(&self, request: CompanyRequest) -> AppResult<CompanyResponse> {
        let company = Company::new(request.name, request.description);

        if company.code.is_empty() {
            return Err(AppError::BadRequest(
                "name must contain at least one letter or digit".to_string(),
            ));
        }

        let company = self.repository.create(&company).await?;
        tracing::info!(code = %company.code, "🏢 Company creada");

        Ok(CompanyResponse { company })
    }

    pub async fn update(&self, code: &str, request: CompanyRequest) -> AppResult<CompanyResponse> {
        let company = self
            .repository
            .update(code, &request.name, request.description.as_deref())
            .await?
            .ok_or_else(|| not_found_error("company", code))?;

        Ok(CompanyResponse { company })
    }

    pub async fn delete(&self, code: &str) -> AppResult<StatusResponse> {
        if !self.repository.delete(code).await? {
            return Err(not_found_error("company", code));
        }

        tracing::info!(code, "🗑️ Company eliminada");
        Ok(StatusResponse::deleted())
    }
}
