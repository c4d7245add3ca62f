//! Policy proposals — premium calculation, submission, and CRUD.
//!
//! DESIGN
//! ======
//! The premium is always recomputed on the server from the vehicle type and
//! policy package; a client-supplied amount is ignored. Rates are flat sums:
//! vehicle base rate plus package rate. Matching is case-insensitive and
//! accepts the marketing package names the enrollment form uses, so
//! "Basic Third Party" prices as basic and "Comprehensive Plus" as its own
//! tier rather than plain comprehensive.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

// =============================================================================
// STATUS
// =============================================================================

/// Proposal lifecycle. Newly submitted proposals become ACTIVE once paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalStatus {
    ProposalSubmitted,
    Active,
}

impl ProposalStatus {
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PROPOSAL_SUBMITTED" => Some(Self::ProposalSubmitted),
            "ACTIVE" => Some(Self::Active),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProposalSubmitted => "PROPOSAL_SUBMITTED",
            Self::Active => "ACTIVE",
        }
    }
}

// =============================================================================
// PREMIUM RATES
// =============================================================================

const VEHICLE_BASE_RATES: &[(&str, f64)] = &[
    ("car", 5000.0),
    ("motorcycle", 3000.0),
    ("bike", 3000.0),
    ("truck", 10000.0),
    ("luxury car", 7500.0),
    ("camper van", 7000.0),
];

/// Base rate for a vehicle type, matched case-insensitively.
#[must_use]
pub fn vehicle_base_rate(vehicle_type: &str) -> Option<f64> {
    let needle = vehicle_type.trim().to_ascii_lowercase();
    VEHICLE_BASE_RATES
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, rate)| *rate)
}

/// Package rate, matched case-insensitively against both the short tier
/// names and the marketing names the enrollment form sends.
/// "comprehensive plus" must be checked before "comprehensive".
#[must_use]
pub fn package_rate(policy_package: &str) -> Option<f64> {
    let needle = policy_package.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return None;
    }
    if needle.contains("comprehensive plus") {
        Some(2000.0)
    } else if needle.contains("comprehensive") {
        Some(1500.0)
    } else if needle.contains("premium") {
        Some(2500.0)
    } else if needle.contains("basic") {
        Some(1000.0)
    } else {
        None
    }
}

/// Table of known package tiers and rates, for display surfaces.
#[must_use]
pub fn package_table() -> Vec<(&'static str, f64)> {
    vec![
        ("basic", 1000.0),
        ("comprehensive", 1500.0),
        ("comprehensive plus", 2000.0),
        ("premium", 2500.0),
    ]
}

/// Compute the full premium for a vehicle and package combination.
///
/// # Errors
///
/// `UnknownVehicle` or `UnknownPackage` when either term fails to match.
pub fn compute_premium(vehicle_type: &str, policy_package: &str) -> Result<f64, ProposalError> {
    let base = vehicle_base_rate(vehicle_type).ok_or_else(|| ProposalError::UnknownVehicle(vehicle_type.to_owned()))?;
    let package =
        package_rate(policy_package).ok_or_else(|| ProposalError::UnknownPackage(policy_package.to_owned()))?;
    Ok(base + package)
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProposalError {
    #[error("user not found: {0}")]
    UserNotFound(Uuid),
    #[error("proposal not found: {0}")]
    NotFound(Uuid),
    #[error("unknown vehicle type: {0}")]
    UnknownVehicle(String),
    #[error("unknown policy package: {0}")]
    UnknownPackage(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Proposal row as served by the API.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_type: String,
    pub vehicle_number: String,
    pub policy_package: String,
    pub premium_amount: f64,
    pub status: String,
    /// ISO `YYYY-MM-DD`.
    pub submission_date: String,
    pub payment_date: Option<String>,
    pub transaction_id: Option<String>,
}

pub(crate) fn row_to_proposal(row: &PgRow) -> ProposalRow {
    ProposalRow {
        id: row.get("id"),
        user_id: row.get("user_id"),
        vehicle_type: row.get("vehicle_type"),
        vehicle_number: row.get("vehicle_number"),
        policy_package: row.get("policy_package"),
        premium_amount: row.get("premium_amount"),
        status: row.get("status"),
        submission_date: row.get("submission_date"),
        payment_date: row.get("payment_date"),
        transaction_id: row.get("transaction_id"),
    }
}

const PROPOSAL_COLUMNS: &str = r"id, user_id, vehicle_type, vehicle_number, policy_package,
    premium_amount, status,
    to_char(submission_date, 'YYYY-MM-DD') AS submission_date,
    to_char(payment_date, 'YYYY-MM-DD') AS payment_date,
    transaction_id";

// =============================================================================
// OPERATIONS
// =============================================================================

/// Submit a proposal for a user. The premium is recomputed here; the status
/// starts at PROPOSAL_SUBMITTED with today's submission date.
///
/// # Errors
///
/// `UserNotFound` when the user does not exist, `UnknownVehicle` or
/// `UnknownPackage` when the terms fail to price.
pub async fn submit_proposal(
    pool: &PgPool,
    user_id: Uuid,
    vehicle_type: &str,
    vehicle_number: &str,
    policy_package: &str,
) -> Result<ProposalRow, ProposalError> {
    let premium = compute_premium(vehicle_type, policy_package)?;

    let user_exists = sqlx::query("SELECT 1 AS one FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    if user_exists.is_none() {
        return Err(ProposalError::UserNotFound(user_id));
    }

    let row = sqlx::query(&format!(
        r"INSERT INTO proposals
              (id, user_id, vehicle_type, vehicle_number, policy_package,
               premium_amount, status, submission_date)
          VALUES ($1, $2, $3, $4, $5, $6, 'PROPOSAL_SUBMITTED', CURRENT_DATE)
          RETURNING {PROPOSAL_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(vehicle_type.trim())
    .bind(vehicle_number.trim())
    .bind(policy_package.trim())
    .bind(premium)
    .fetch_one(pool)
    .await?;

    Ok(row_to_proposal(&row))
}

/// List every proposal in the system, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_proposals(pool: &PgPool) -> Result<Vec<ProposalRow>, ProposalError> {
    let rows = sqlx::query(&format!(
        "SELECT {PROPOSAL_COLUMNS} FROM proposals ORDER BY submission_date DESC, id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_proposal).collect())
}

/// List one user's proposals, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_proposals_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<ProposalRow>, ProposalError> {
    let rows = sqlx::query(&format!(
        "SELECT {PROPOSAL_COLUMNS} FROM proposals WHERE user_id = $1 ORDER BY submission_date DESC, id"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_proposal).collect())
}

/// Fetch one proposal by id.
///
/// # Errors
///
/// `NotFound` when no row matches.
pub async fn get_proposal(pool: &PgPool, proposal_id: Uuid) -> Result<ProposalRow, ProposalError> {
    let row = sqlx::query(&format!("SELECT {PROPOSAL_COLUMNS} FROM proposals WHERE id = $1"))
        .bind(proposal_id)
        .fetch_optional(pool)
        .await?
        .ok_or(ProposalError::NotFound(proposal_id))?;

    Ok(row_to_proposal(&row))
}

/// Delete a proposal. Claims and payments cascade at the schema level.
///
/// # Errors
///
/// `NotFound` when no row matches.
pub async fn delete_proposal(pool: &PgPool, proposal_id: Uuid) -> Result<(), ProposalError> {
    let result = sqlx::query("DELETE FROM proposals WHERE id = $1")
        .bind(proposal_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ProposalError::NotFound(proposal_id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "proposal_test.rs"]
mod tests;
