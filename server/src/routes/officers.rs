//! Staff account routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::auth::Role;
use crate::services::officer::{self, OfficerRow};
use crate::state::AppState;

/// `GET /api/officer` — list every staff account (OFFICER+).
pub async fn list_officers(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<OfficerRow>>, StatusCode> {
    auth.require(Role::Officer)?;

    let rows = officer::list_officers(&state.pool).await.map_err(officer_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/officer/{id}` — one staff account (OFFICER+).
pub async fn get_officer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(officer_id): Path<Uuid>,
) -> Result<Json<OfficerRow>, StatusCode> {
    auth.require(Role::Officer)?;

    let row = officer::get_officer(&state.pool, officer_id).await.map_err(officer_error_to_status)?;
    Ok(Json(row))
}

/// `DELETE /api/officer/{id}` — remove a staff account (ADMIN). Admins
/// cannot remove their own account.
pub async fn delete_officer(State(state): State<AppState>, auth: AuthUser, Path(officer_id): Path<Uuid>) -> Response {
    if let Err(status) = auth.require(Role::Admin) {
        return status.into_response();
    }

    let row = match officer::get_officer(&state.pool, officer_id).await {
        Ok(row) => row,
        Err(e) => return officer_error_to_status(e).into_response(),
    };
    if row.email == auth.email {
        return (StatusCode::BAD_REQUEST, "Cannot delete your own account").into_response();
    }

    match officer::delete_officer(&state.pool, officer_id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => officer_error_to_status(e).into_response(),
    }
}

pub(crate) fn officer_error_to_status(err: officer::OfficerError) -> StatusCode {
    match err {
        officer::OfficerError::NotFound(_) => StatusCode::NOT_FOUND,
        officer::OfficerError::Db(e) => {
            tracing::error!(error = %e, "officer query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "officers_test.rs"]
mod tests;
