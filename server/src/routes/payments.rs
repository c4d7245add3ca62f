//! Payment routes, doubling as the claims surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The web client files and reads claims through `/api/payments/*` paths,
//! so claim handlers live here next to premium payment processing rather
//! than under a separate prefix.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::proposals::proposal_error_to_status;
use crate::services::auth::Role;
use crate::services::claim::{self, ClaimError};
use crate::services::payment::{self, PaymentError};
use crate::services::proposal;
use crate::state::AppState;

// =============================================================================
// PAYMENTS
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentBody {
    pub proposal_id: Uuid,
    /// Free-form payment method label; defaults to "card".
    pub method: Option<String>,
}

/// `POST /api/payments/process` — pay a submitted proposal's premium and
/// activate it; owner, or OFFICER+ collecting on a policyholder's behalf.
pub async fn process_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ProcessPaymentBody>,
) -> Response {
    let row = match proposal::get_proposal(&state.pool, body.proposal_id).await {
        Ok(row) => row,
        Err(e) => return proposal_error_to_status(e).into_response(),
    };
    if let Err(status) = auth.require_self_or(&state.pool, row.user_id, Role::Officer).await {
        return status.into_response();
    }

    let method = body.method.as_deref().unwrap_or("card");
    match payment::process_payment(&state.pool, body.proposal_id, method).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => payment_error_response(&e),
    }
}

/// `GET /api/payments/user/{user_id}` — payment history; own, or OFFICER+.
pub async fn payment_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Response {
    if let Err(status) = auth.require_self_or(&state.pool, user_id, Role::Officer).await {
        return status.into_response();
    }

    match payment::list_payments_for_user(&state.pool, user_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => payment_error_response(&e),
    }
}

// =============================================================================
// CLAIMS
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileClaimQuery {
    pub user_id: Uuid,
    pub proposal_id: Uuid,
    pub reason: String,
}

#[derive(Deserialize)]
pub struct ClaimStatusQuery {
    pub status: String,
}

/// `POST /api/payments/claim?userId=&proposalId=&reason=` — file a claim
/// against an ACTIVE proposal; own, or OFFICER+ on a policyholder's behalf.
pub async fn file_claim(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<FileClaimQuery>,
) -> Response {
    if let Err(status) = auth.require_self_or(&state.pool, query.user_id, Role::Officer).await {
        return status.into_response();
    }

    match claim::file_claim(&state.pool, query.user_id, query.proposal_id, &query.reason).await {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(e) => claim_error_response(&e),
    }
}

/// `GET /api/payments/claims` — the full adjudication queue (OFFICER+).
pub async fn list_claims(State(state): State<AppState>, auth: AuthUser) -> Response {
    if let Err(status) = auth.require(Role::Officer) {
        return status.into_response();
    }

    match claim::list_claims(&state.pool).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => claim_error_response(&e),
    }
}

/// `GET /api/payments/claims/user/{user_id}` — one user's claims; own, or
/// OFFICER+.
pub async fn list_user_claims(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Response {
    if let Err(status) = auth.require_self_or(&state.pool, user_id, Role::Officer).await {
        return status.into_response();
    }

    match claim::list_claims_for_user(&state.pool, user_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => claim_error_response(&e),
    }
}

/// `PUT /api/payments/claim/{claim_id}/status?status=` — adjudicate a claim
/// (OFFICER+). Any known status may be set, including moving a decided claim
/// back to UNDER_REVIEW.
pub async fn update_claim_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(claim_id): Path<Uuid>,
    Query(query): Query<ClaimStatusQuery>,
) -> Response {
    if let Err(status) = auth.require(Role::Officer) {
        return status.into_response();
    }

    match claim::set_claim_status(&state.pool, claim_id, &query.status).await {
        Ok(()) => (StatusCode::OK, "Claim status updated successfully").into_response(),
        Err(e) => claim_error_response(&e),
    }
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

fn payment_error_response(err: &PaymentError) -> Response {
    match err {
        PaymentError::ProposalNotFound(_) => StatusCode::NOT_FOUND.into_response(),
        PaymentError::AlreadyPaid(_) => (StatusCode::BAD_REQUEST, "Proposal already paid").into_response(),
        PaymentError::Db(e) => {
            tracing::error!(error = %e, "payment query failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn claim_error_response(err: &ClaimError) -> Response {
    match err {
        ClaimError::NotFound(_) | ClaimError::ProposalNotFound(_) => StatusCode::NOT_FOUND.into_response(),
        ClaimError::ProposalNotActive(_) => (StatusCode::BAD_REQUEST, "Proposal is not active").into_response(),
        ClaimError::EmptyReason => (StatusCode::BAD_REQUEST, "Claim reason is required").into_response(),
        ClaimError::UnknownStatus(s) => {
            (StatusCode::BAD_REQUEST, format!("Unknown claim status: {s}")).into_response()
        }
        ClaimError::Db(e) => {
            tracing::error!(error = %e, "claim query failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "payments_test.rs"]
mod tests;
