//! Premium payments — transaction ids, activation, payment history.
//!
//! DESIGN
//! ======
//! Paying a proposal is a single conditional UPDATE guarded on the
//! PROPOSAL_SUBMITTED status, so two concurrent payment attempts cannot both
//! activate the same proposal. The payment row is recorded afterwards with
//! the same transaction id stamped on the proposal.

use rand::Rng;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("proposal not found: {0}")]
    ProposalNotFound(Uuid),
    #[error("proposal already paid: {0}")]
    AlreadyPaid(Uuid),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Payment record as served by the API.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub proposal_id: Uuid,
    pub amount: f64,
    pub method: String,
    pub transaction_id: String,
    /// ISO `YYYY-MM-DD`.
    pub paid_on: String,
}

fn row_to_payment(row: &PgRow) -> PaymentRow {
    PaymentRow {
        id: row.get("id"),
        user_id: row.get("user_id"),
        proposal_id: row.get("proposal_id"),
        amount: row.get("amount"),
        method: row.get("method"),
        transaction_id: row.get("transaction_id"),
        paid_on: row.get("paid_on"),
    }
}

/// Generate a transaction id: `TXN` + epoch millis + four random digits.
#[must_use]
pub fn generate_transaction_id() -> String {
    let millis = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let suffix: u32 = rand::rng().random_range(0..10_000);
    format!("TXN{millis}{suffix:04}")
}

/// Pay a submitted proposal's premium: stamp it ACTIVE with a fresh
/// transaction id and record the payment.
///
/// # Errors
///
/// `AlreadyPaid` when the proposal is no longer in PROPOSAL_SUBMITTED,
/// `ProposalNotFound` when it does not exist.
pub async fn process_payment(pool: &PgPool, proposal_id: Uuid, method: &str) -> Result<PaymentRow, PaymentError> {
    let transaction_id = generate_transaction_id();

    let activated = sqlx::query(
        r"UPDATE proposals
          SET status = 'ACTIVE', payment_date = CURRENT_DATE, transaction_id = $2
          WHERE id = $1 AND status = 'PROPOSAL_SUBMITTED'
          RETURNING user_id, premium_amount",
    )
    .bind(proposal_id)
    .bind(&transaction_id)
    .fetch_optional(pool)
    .await?;

    let Some(activated) = activated else {
        let exists = sqlx::query("SELECT 1 AS one FROM proposals WHERE id = $1")
            .bind(proposal_id)
            .fetch_optional(pool)
            .await?;
        return Err(if exists.is_some() {
            PaymentError::AlreadyPaid(proposal_id)
        } else {
            PaymentError::ProposalNotFound(proposal_id)
        });
    };

    let user_id: Uuid = activated.get("user_id");
    let amount: f64 = activated.get("premium_amount");

    let row = sqlx::query(
        r"INSERT INTO payments (id, user_id, proposal_id, amount, method, transaction_id, paid_on)
          VALUES ($1, $2, $3, $4, $5, $6, CURRENT_DATE)
          RETURNING id, user_id, proposal_id, amount, method, transaction_id,
                    to_char(paid_on, 'YYYY-MM-DD') AS paid_on",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(proposal_id)
    .bind(amount)
    .bind(method.trim())
    .bind(&transaction_id)
    .fetch_one(pool)
    .await?;

    Ok(row_to_payment(&row))
}

/// A user's payment history, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_payments_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<PaymentRow>, PaymentError> {
    let rows = sqlx::query(
        r"SELECT id, user_id, proposal_id, amount, method, transaction_id,
                 to_char(paid_on, 'YYYY-MM-DD') AS paid_on
          FROM payments
          WHERE user_id = $1
          ORDER BY paid_on DESC, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_payment).collect())
}

#[cfg(test)]
#[path = "payment_test.rs"]
mod tests;
