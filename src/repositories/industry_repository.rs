use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{CompanyIndustry, Industry};
use crate::repositories::IndustryRepository;
use crate::utils::errors::{on_conflict, AppResult};

pub struct PgIndustryRepository {
    pool: PgPool,
}

impl PgIndustryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IndustryRepository for PgIndustryRepository {
    async fn list_all(&self) -> AppResult<Vec<Industry>> {
        let industries = sqlx::query_as::<_, Industry>("SELECT code, industry FROM industries")
            .fetch_all(&self.pool)
            .await?;

        Ok(industries)
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Industry>> {
        let industry = sqlx::query_as::<_, Industry>(
            "SELECT code, industry FROM industries WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(industry)
    }

    async fn company_codes(&self, code: &str) -> AppResult<Vec<String>> {
        let codes = sqlx::query_scalar::<_, String>(
            r#"
            SELECT comp_code
            FROM companies_industries
            WHERE indus_code = $1
            ORDER BY comp_code
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;

        Ok(codes)
    }

    async fn create(&self, industry: &Industry) -> AppResult<Industry> {
        let created = sqlx::query_as::<_, Industry>(
            r#"
            INSERT INTO industries (code, industry)
            VALUES ($1, $2)
            RETURNING code, industry
            "#,
        )
        .bind(&industry.code)
        .bind(&industry.industry)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| on_conflict(e, "Industry", &industry.code))?;

        Ok(created)
    }

    async fn associate(&self, indus_code: &str, comp_code: &str) -> AppResult<CompanyIndustry> {
        let link = sqlx::query_as::<_, CompanyIndustry>(
            r#"
            INSERT INTO companies_industries (comp_code, indus_code)
            VALUES ($1, $2)
            RETURNING comp_code, indus_code
            "#,
        )
        .bind(comp_code)
        .bind(indus_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            on_conflict(
                e,
                "Company industry",
                &format!("{}/{}", comp_code, indus_code),
            )
        })?;

        Ok(link)
    }
}
