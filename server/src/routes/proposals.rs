//! Policy proposal routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::auth::Role;
use crate::services::proposal::{self, ProposalError, ProposalRow};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProposalBody {
    pub vehicle_type: String,
    pub vehicle_number: String,
    pub policy_package: String,
    /// Sent by the enrollment form but ignored; the premium is always
    /// recomputed server-side.
    #[serde(default)]
    pub premium_amount: Option<f64>,
}

/// `POST /api/proposals/submit/{user_id}` — submit a proposal; own account,
/// or OFFICER+ acting on a policyholder's behalf.
pub async fn submit_proposal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<SubmitProposalBody>,
) -> Response {
    if let Err(status) = auth.require_self_or(&state.pool, user_id, Role::Officer).await {
        return status.into_response();
    }
    if body.premium_amount.is_some() {
        tracing::debug!(%user_id, "ignoring client-supplied premium amount");
    }

    let result =
        proposal::submit_proposal(&state.pool, user_id, &body.vehicle_type, &body.vehicle_number, &body.policy_package)
            .await;
    match result {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(e @ (ProposalError::UnknownVehicle(_) | ProposalError::UnknownPackage(_))) => {
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(e) => proposal_error_to_status(e).into_response(),
    }
}

/// `GET /api/proposals` — every proposal in the system (OFFICER+).
pub async fn list_proposals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ProposalRow>>, StatusCode> {
    auth.require(Role::Officer)?;

    let rows = proposal::list_proposals(&state.pool).await.map_err(proposal_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/proposals/user/{user_id}` — one user's proposals; own, or
/// OFFICER+.
pub async fn list_user_proposals(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ProposalRow>>, StatusCode> {
    auth.require_self_or(&state.pool, user_id, Role::Officer).await?;

    let rows = proposal::list_proposals_for_user(&state.pool, user_id)
        .await
        .map_err(proposal_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/proposals/{id}` — one proposal; owner, or OFFICER+.
pub async fn get_proposal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(proposal_id): Path<Uuid>,
) -> Result<Json<ProposalRow>, StatusCode> {
    let row = proposal::get_proposal(&state.pool, proposal_id)
        .await
        .map_err(proposal_error_to_status)?;
    auth.require_self_or(&state.pool, row.user_id, Role::Officer).await?;

    Ok(Json(row))
}

/// `DELETE /api/proposals/{id}` — remove a proposal; owner, or ADMIN.
/// Claims and payments cascade with it.
pub async fn delete_proposal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(proposal_id): Path<Uuid>,
) -> Response {
    let row = match proposal::get_proposal(&state.pool, proposal_id).await {
        Ok(row) => row,
        Err(e) => return proposal_error_to_status(e).into_response(),
    };
    if let Err(status) = auth.require_self_or(&state.pool, row.user_id, Role::Admin).await {
        return status.into_response();
    }

    match proposal::delete_proposal(&state.pool, proposal_id).await {
        Ok(()) => (StatusCode::OK, "Proposal deleted successfully").into_response(),
        Err(e) => proposal_error_to_status(e).into_response(),
    }
}

pub(crate) fn proposal_error_to_status(err: ProposalError) -> StatusCode {
    match err {
        ProposalError::UserNotFound(_) | ProposalError::NotFound(_) => StatusCode::NOT_FOUND,
        ProposalError::UnknownVehicle(_) | ProposalError::UnknownPackage(_) => StatusCode::BAD_REQUEST,
        ProposalError::Db(e) => {
            tracing::error!(error = %e, "proposal query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "proposals_test.rs"]
mod tests;
