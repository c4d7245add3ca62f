//! Wire types for the insurance API.
//!
//! Field names follow the server's JSON convention (camelCase), so these
//! types deserialize server responses directly and serialize request bodies
//! the server accepts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// ENUMS
// =============================================================================

/// Access roles. `Ord` follows the USER < OFFICER < ADMIN ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Officer,
    Admin,
}

impl Role {
    /// Parse a role string case-insensitively.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USER" => Some(Self::User),
            "OFFICER" => Some(Self::Officer),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Officer => "OFFICER",
            Self::Admin => "ADMIN",
        }
    }

    /// Whether this role meets a requirement of `required`.
    #[must_use]
    pub fn satisfies(self, required: Role) -> bool {
        self >= required
    }
}

/// Proposal lifecycle. A submitted proposal becomes ACTIVE once paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    ProposalSubmitted,
    Active,
}

/// Claim adjudication states. Decided claims may be reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ClaimStatus {
    /// Parse a wire status string (`PENDING`, `UNDER_REVIEW`, ...).
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
// RESPONSE TYPES
// =============================================================================

/// Policyholder profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub address: String,
    /// ISO `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub aadhaar_number: String,
    pub pan_number: String,
    pub role: Role,
    pub created_at: String,
}

/// Staff profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
}

/// Policy proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_type: String,
    pub vehicle_number: String,
    pub policy_package: String,
    pub premium_amount: f64,
    pub status: ProposalStatus,
    /// ISO `YYYY-MM-DD`.
    pub submission_date: String,
    pub payment_date: Option<String>,
    pub transaction_id: Option<String>,
}

/// Premium payment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub proposal_id: Uuid,
    pub amount: f64,
    pub method: String,
    pub transaction_id: String,
    /// ISO `YYYY-MM-DD`.
    pub paid_on: String,
}

/// Insurance claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: Uuid,
    pub user_id: Uuid,
    pub proposal_id: Uuid,
    pub reason: String,
    pub status: ClaimStatus,
    /// ISO `YYYY-MM-DD`.
    pub date_filed: String,
}

/// Token payload returned by login and validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub email: String,
    pub role: Role,
}

/// Aggregate counters from the officer dashboard endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub pending_claims: i64,
    pub under_review_claims: i64,
    pub approved_claims: i64,
    pub rejected_claims: i64,
    pub total_proposals_reviewed: i64,
    pub active_policies: i64,
    pub total_premium: f64,
    pub registered_users: i64,
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Registration body for a policyholder account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    /// ISO `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub aadhaar_number: String,
    pub pan_number: String,
}

/// Registration body for a staff account.
#[derive(Debug, Clone, Serialize)]
pub struct NewOfficer {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Login request body. `user_type` picks the account table checked.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub user_type: Role,
}

/// Proposal submission body. The server recomputes the premium from the
/// vehicle type and package, so no amount is sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProposal {
    pub vehicle_type: String,
    pub vehicle_number: String,
    pub policy_package: String,
}

/// Partial profile update; unset fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhaar_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
