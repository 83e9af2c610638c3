use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Company, CompanySummary};
use crate::repositories::CompanyRepository;
use crate::utils::errors::{on_conflict, AppResult};

pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn list_all(&self) -> AppResult<Vec<CompanySummary>> {
        let companies = sqlx::query_as::<_, CompanySummary>("SELECT code, name FROM companies")
            .fetch_all(&self.pool)
            .await?;

        Ok(companies)
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    async fn industry_names(&self, code: &str) -> AppResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT i.industry
            FROM industries AS i
              INNER JOIN companies_industries AS ci ON (ci.indus_code = i.code)
            WHERE ci.comp_code = $1
            ORDER BY i.industry
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    async fn create(&self, company: &Company) -> AppResult<Company> {
        let created = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
        )
        .bind(&company.code)
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| on_conflict(e, "Company", &company.code))?;

        Ok(created)
    }

    async fn update(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Option<Company>> {
        let updated = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = $1, description = $2
            WHERE code = $3
            RETURNING code, name, description
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, code: &str) -> AppResult<bool> {
        let deleted = sqlx::query_scalar::<_, String>(
            "DELETE FROM companies WHERE code = $1 RETURNING code",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted.is_some())
    }
}
