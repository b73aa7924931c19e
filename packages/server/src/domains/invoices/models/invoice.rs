use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::invoices::schema::InvoiceStatus;

/// Parse a submitted row id into the uuid the `invoices.id` column expects.
/// A malformed id fails the statement the same way the database would.
fn parse_row_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).with_context(|| format!("invalid invoice id: {id}"))
}

/// Invoice row ready for insertion - SQL persistence layer
///
/// `amount` is in integer minor units (cents); `date` is ISO `YYYY-MM-DD`
/// text. Both conversions happen in the action before this struct exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: String,
}

impl NewInvoice {
    /// Insert new invoice
    pub async fn insert(&self, pool: &PgPool) -> Result<()> {
        sqlx::query(
            "INSERT INTO invoices (customer_id, amount, status, date)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&self.customer_id)
        .bind(self.amount)
        .bind(self.status.as_str())
        .bind(&self.date)
        .execute(pool)
        .await?;
        Ok(())
    }
}

/// Column updates for an existing invoice; `date` is never rewritten
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceUpdate {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
}

impl InvoiceUpdate {
    /// Update the row matching `id`
    pub async fn apply(&self, pool: &PgPool) -> Result<()> {
        sqlx::query(
            "UPDATE invoices
             SET customer_id = $2, amount = $3, status = $4
             WHERE id = $1",
        )
        .bind(parse_row_id(&self.id)?)
        .bind(&self.customer_id)
        .bind(self.amount)
        .bind(self.status.as_str())
        .execute(pool)
        .await?;
        Ok(())
    }
}

/// Delete the invoice matching `id`
pub async fn delete_invoice_row(id: &str, pool: &PgPool) -> Result<()> {
    sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(parse_row_id(id)?)
        .execute(pool)
        .await?;
    Ok(())
}
