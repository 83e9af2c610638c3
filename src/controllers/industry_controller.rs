use std::sync::Arc;

use crate::dto::industry_dto::{
    AssociateCompanyRequest, AssociationResponse, CreateIndustryRequest, IndustryDetail,
    IndustryDetailResponse, IndustryListResponse, IndustryResponse,
};
use crate::models::Industry;
use crate::repositories::IndustryRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct IndustryController {
    repository: Arc<dyn IndustryRepository>,
}

impl IndustryController {
    pub fn new(repository: Arc<dyn IndustryRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<IndustryListResponse> {
        let industries = self.repository.list_all().await?;
        Ok(IndustryListResponse { industries })
    }

    pub async fn get(&self, code: &str) -> AppResult<IndustryDetailResponse> {
        let industry = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found_error("industry", code))?;

        let companies = self.repository.company_codes(code).await?;

        Ok(IndustryDetailResponse {
            industry: IndustryDetail {
                code: industry.code,
                industry: industry.industry,
                companies,
            },
        })
    }

    pub async fn create(&self, request: CreateIndustryRequest) -> AppResult<IndustryResponse> {
        let industry = Industry::new(request.industry);

        if industry.code.is_empty() {
            return Err(AppError::BadRequest(
                "industry must contain at least one letter or digit".to_string(),
            ));
        }

        let industry = self.repository.create(&industry).await?;
        tracing::info!(code = %industry.code, "🏭 Industry creada");

        Ok(IndustryResponse { industry })
    }

    pub async fn associate(
        &self,
        indus_code: &str,
        request: AssociateCompanyRequest,
    ) -> AppResult<AssociationResponse> {
        let link = self
            .repository
            .associate(indus_code, &request.company_code)
            .await?;

        tracing::info!(
            comp_code = %link.comp_code,
            indus_code = %link.indus_code,
            "🔗 Company asociada a industry"
        );

        Ok(AssociationResponse { industry: link })
    }
}
