//! Policyholder account routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::auth::Role;
use crate::services::user::{self, UpdateUser, UserRow};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    pub aadhaar_number: Option<String>,
    pub pan_number: Option<String>,
}

/// `GET /api/user` — list every policyholder (OFFICER+).
pub async fn list_users(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<UserRow>>, StatusCode> {
    auth.require(Role::Officer)?;

    let rows = user::list_users(&state.pool).await.map_err(user_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/user/me` — the caller's own policyholder record, resolved from
/// the token's email. Officers hold no policyholder row and get a 404.
pub async fn current_user(State(state): State<AppState>, auth: AuthUser) -> Result<Json<UserRow>, StatusCode> {
    let row = user::find_by_email(&state.pool, &auth.email)
        .await
        .map_err(user_error_to_status)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

/// `GET /api/user/{id}` — one policyholder; own record, or OFFICER+.
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserRow>, StatusCode> {
    auth.require_self_or(&state.pool, user_id, Role::Officer).await?;

    let row = user::get_user(&state.pool, user_id).await.map_err(user_error_to_status)?;
    Ok(Json(row))
}

/// `PUT /api/user/{id}` — partial profile update; own record, or OFFICER+.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<UserRow>, StatusCode> {
    auth.require_self_or(&state.pool, user_id, Role::Officer).await?;

    let update = UpdateUser {
        name: body.name,
        email: body.email,
        address: body.address,
        date_of_birth: body.date_of_birth,
        aadhaar_number: body.aadhaar_number,
        pan_number: body.pan_number,
    };
    let row = user::update_user(&state.pool, user_id, &update)
        .await
        .map_err(user_error_to_status)?;
    Ok(Json(row))
}

/// `DELETE /api/user/{id}` — remove a policyholder (ADMIN).
pub async fn delete_user(State(state): State<AppState>, auth: AuthUser, Path(user_id): Path<Uuid>) -> Response {
    if let Err(status) = auth.require(Role::Admin) {
        return status.into_response();
    }

    match user::delete_user(&state.pool, user_id).await {
        Ok(()) => (StatusCode::OK, "User deleted successfully").into_response(),
        Err(e) => user_error_to_status(e).into_response(),
    }
}

pub(crate) fn user_error_to_status(err: user::UserError) -> StatusCode {
    match err {
        user::UserError::NotFound(_) => StatusCode::NOT_FOUND,
        user::UserError::InvalidEmail | user::UserError::InvalidDate | user::UserError::EmailExists => {
            StatusCode::BAD_REQUEST
        }
        user::UserError::Db(e) => {
            tracing::error!(error = %e, "user query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
