use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::invoice::next_paid_date;
use crate::models::{Invoice, InvoiceSummary, InvoiceWithCompany};
use crate::repositories::InvoiceRepository;
use crate::utils::errors::AppResult;

pub struct PgInvoiceRepository {
    pool: PgPool,
}

impl PgInvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for PgInvoiceRepository {
    async fn list_all(&self) -> AppResult<Vec<InvoiceSummary>> {
        let invoices = sqlx::query_as::<_, InvoiceSummary>(
            "SELECT id, comp_code FROM invoices ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    async fn find_with_company(&self, id: i32) -> AppResult<Option<InvoiceWithCompany>> {
        let invoice = sqlx::query_as::<_, InvoiceWithCompany>(
            r#"
            SELECT i.id,
                   i.comp_code,
                   i.amt,
                   i.paid,
                   i.add_date,
                   i.paid_date,
                   c.name,
                   c.description
            FROM invoices AS i
              INNER JOIN companies AS c ON (i.comp_code = c.code)
            WHERE i.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    async fn create(&self, comp_code: &str, amt: Decimal, today: NaiveDate) -> AppResult<Invoice> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (comp_code, amt, add_date)
            VALUES ($1, $2, $3)
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(comp_code)
        .bind(amt)
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        Ok(invoice)
    }

    async fn update(
        &self,
        id: i32,
        amt: Decimal,
        paid: bool,
        today: NaiveDate,
    ) -> AppResult<Option<Invoice>> {
        let mut tx = self.pool.begin().await?;

        // La fila queda bloqueada hasta el commit
        let current = sqlx::query_scalar::<_, Option<NaiveDate>>(
            "SELECT paid_date FROM invoices WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current_paid_date) = current else {
            tx.rollback().await?;
            return Ok(None);
        };

        let paid_date = next_paid_date(current_paid_date, paid, today);

        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices
            SET amt = $1, paid = $2, paid_date = $3
            WHERE id = $4
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(amt)
        .bind(paid)
        .bind(paid_date)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(id, paid, ?paid_date, "🧾 Invoice actualizada");

        Ok(Some(invoice))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM invoices WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(deleted.is_some())
    }
}
