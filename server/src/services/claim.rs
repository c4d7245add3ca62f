//! Claims — filing against active policies and adjudication.
//!
//! DESIGN
//! ======
//! A claim can only be filed against the claimant's own ACTIVE proposal.
//! Status moves are unrestricted for reviewers: any known status can be set
//! at any time, so a REJECTED claim can be reopened for another look.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

// =============================================================================
// STATUS
// =============================================================================

/// Claim adjudication states. New claims start PENDING.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ClaimStatus {
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "UNDER_REVIEW" => Some(Self::UnderReview),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ClaimError {
    #[error("claim not found: {0}")]
    NotFound(Uuid),
    #[error("proposal not found: {0}")]
    ProposalNotFound(Uuid),
    #[error("proposal is not active: {0}")]
    ProposalNotActive(Uuid),
    #[error("claim reason is required")]
    EmptyReason,
    #[error("unknown claim status: {0}")]
    UnknownStatus(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Claim row as served by the API.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub proposal_id: Uuid,
    pub reason: String,
    pub status: String,
    /// ISO `YYYY-MM-DD`.
    pub date_filed: String,
}

fn row_to_claim(row: &PgRow) -> ClaimRow {
    ClaimRow {
        id: row.get("id"),
        user_id: row.get("user_id"),
        proposal_id: row.get("proposal_id"),
        reason: row.get("reason"),
        status: row.get("status"),
        date_filed: row.get("date_filed"),
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// File a claim against a user's own active proposal. Starts PENDING with
/// today's filing date.
///
/// # Errors
///
/// `EmptyReason` for a blank reason, `ProposalNotFound` when the proposal
/// does not exist or belongs to another user, `ProposalNotActive` when its
/// premium has not been paid.
pub async fn file_claim(
    pool: &PgPool,
    user_id: Uuid,
    proposal_id: Uuid,
    reason: &str,
) -> Result<ClaimRow, ClaimError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ClaimError::EmptyReason);
    }

    let proposal = sqlx::query("SELECT status FROM proposals WHERE id = $1 AND user_id = $2")
        .bind(proposal_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    let Some(proposal) = proposal else {
        return Err(ClaimError::ProposalNotFound(proposal_id));
    };
    let status: String = proposal.get("status");
    if status != "ACTIVE" {
        return Err(ClaimError::ProposalNotActive(proposal_id));
    }

    let row = sqlx::query(
        r"INSERT INTO claims (id, user_id, proposal_id, reason, status, date_filed)
          VALUES ($1, $2, $3, $4, 'PENDING', CURRENT_DATE)
          RETURNING id, user_id, proposal_id, reason, status,
                    to_char(date_filed, 'YYYY-MM-DD') AS date_filed",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(proposal_id)
    .bind(reason)
    .fetch_one(pool)
    .await?;

    Ok(row_to_claim(&row))
}

/// List every claim in the system, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_claims(pool: &PgPool) -> Result<Vec<ClaimRow>, ClaimError> {
    let rows = sqlx::query(
        r"SELECT id, user_id, proposal_id, reason, status,
                 to_char(date_filed, 'YYYY-MM-DD') AS date_filed
          FROM claims
          ORDER BY date_filed DESC, id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_claim).collect())
}

/// List one user's claims, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_claims_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<ClaimRow>, ClaimError> {
    let rows = sqlx::query(
        r"SELECT id, user_id, proposal_id, reason, status,
                 to_char(date_filed, 'YYYY-MM-DD') AS date_filed
          FROM claims
          WHERE user_id = $1
          ORDER BY date_filed DESC, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_claim).collect())
}

/// Set a claim's adjudication status.
///
/// # Errors
///
/// `UnknownStatus` when the status string does not parse, `NotFound` when
/// the claim does not exist.
pub async fn set_claim_status(pool: &PgPool, claim_id: Uuid, status: &str) -> Result<(), ClaimError> {
    let status = ClaimStatus::from_str(status).ok_or_else(|| ClaimError::UnknownStatus(status.to_owned()))?;

    let result = sqlx::query("UPDATE claims SET status = $2 WHERE id = $1")
        .bind(claim_id)
        .bind(status.as_str())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ClaimError::NotFound(claim_id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "claim_test.rs"]
mod tests;
