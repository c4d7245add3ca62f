//! Auth routes — registration, login, token validation, bearer extraction.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::services::auth::{self, NewOfficer, NewUser, Role};
use crate::services::{token, user};
use crate::state::AppState;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated caller extracted from the `Authorization: Bearer` header.
/// Use as a handler parameter to require authentication; role checks happen
/// in the handler via `require` / `require_self_or`.
pub struct AuthUser {
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    /// Require the caller's role to cover `required`.
    pub(crate) fn require(&self, required: Role) -> Result<(), StatusCode> {
        if self.role.satisfies(required) {
            return Ok(());
        }
        Err(StatusCode::FORBIDDEN)
    }

    /// Require a role covering `required`, or ownership of the `user_id`
    /// record. Ownership is resolved through the caller's email since the
    /// token carries no database id.
    pub(crate) async fn require_self_or(
        &self,
        pool: &PgPool,
        user_id: Uuid,
        required: Role,
    ) -> Result<(), StatusCode> {
        if self.role.satisfies(required) {
            return Ok(());
        }

        let own_id = user::find_id_by_email(pool, &self.email)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        if own_id == Some(user_id) {
            return Ok(());
        }
        Err(StatusCode::FORBIDDEN)
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| StatusCode::UNAUTHORIZED)?;

        let app_state = AppState::from_ref(state);
        let identity = token::verify(&app_state.tokens, bearer.token()).map_err(|_| StatusCode::UNAUTHORIZED)?;

        Ok(Self { email: identity.email, role: identity.role })
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserBody {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub date_of_birth: String,
    pub aadhaar_number: String,
    pub pan_number: String,
}

#[derive(Deserialize)]
pub struct RegisterOfficerBody {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to OFFICER when omitted.
    pub role: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    pub email: String,
    pub password: String,
    pub user_type: String,
}

/// Token payload echoed to the client on login and validation.
#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub email: String,
    pub role: String,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/register/user` — create a policyholder account.
pub async fn register_user(State(state): State<AppState>, Json(body): Json<RegisterUserBody>) -> Response {
    let new_user = NewUser {
        name: body.name,
        email: body.email,
        password: body.password,
        address: body.address,
        date_of_birth: body.date_of_birth,
        aadhaar_number: body.aadhaar_number,
        pan_number: body.pan_number,
    };

    match auth::register_user(&state.pool, &new_user).await {
        Ok(_) => (StatusCode::OK, "User registered successfully").into_response(),
        Err(e) => auth_error_response(&e),
    }
}

/// `POST /api/auth/register/officer` — create a staff account (ADMIN only).
pub async fn register_officer(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(body): Json<RegisterOfficerBody>,
) -> Response {
    if let Err(status) = auth_user.require(Role::Admin) {
        return status.into_response();
    }

    let Some(role) = Role::from_str(body.role.as_deref().unwrap_or("OFFICER")) else {
        return (StatusCode::BAD_REQUEST, "Unknown role").into_response();
    };

    let new_officer = NewOfficer { name: body.name, email: body.email, password: body.password, role };
    match auth::register_officer(&state.pool, &new_officer).await {
        Ok(_) => (StatusCode::OK, "Officer registered successfully").into_response(),
        Err(e) => auth_error_response(&e),
    }
}

/// `POST /api/auth/login` — authenticate and issue a bearer token.
///
/// `userType` picks the account table; any failure collapses into a single
/// 400 "Invalid credentials" response.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginBody>) -> Response {
    let Some(user_type) = Role::from_str(&body.user_type) else {
        return (StatusCode::BAD_REQUEST, "Invalid credentials").into_response();
    };

    match auth::login(&state.pool, &state.tokens, &body.email, &body.password, user_type).await {
        Ok(outcome) => Json(TokenResponse {
            token: outcome.token,
            email: outcome.email,
            role: outcome.role.as_str().to_owned(),
        })
        .into_response(),
        Err(e) => auth_error_response(&e),
    }
}

/// `GET /api/auth/validate` — echo identity for a live bearer token.
///
/// Responds 400 "Invalid token" (not 401) for a missing or dead token; the
/// web client's session-restore flow branches on that distinction.
pub async fn validate(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(raw) = bearer_token(&headers) else {
        return (StatusCode::BAD_REQUEST, "Invalid token").into_response();
    };

    match token::verify(&state.tokens, raw) {
        Ok(identity) => Json(TokenResponse {
            token: raw.to_owned(),
            email: identity.email,
            role: identity.role.as_str().to_owned(),
        })
        .into_response(),
        Err(_) => (StatusCode::BAD_REQUEST, "Invalid token").into_response(),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::AUTHORIZATION)?.to_str().ok()?.strip_prefix("Bearer ")
}

fn auth_error_response(err: &auth::AuthError) -> Response {
    match err {
        auth::AuthError::EmailExists => (StatusCode::BAD_REQUEST, "Email already exists").into_response(),
        auth::AuthError::InvalidEmail => (StatusCode::BAD_REQUEST, "Invalid email").into_response(),
        auth::AuthError::InvalidDate => (StatusCode::BAD_REQUEST, "Invalid date of birth").into_response(),
        auth::AuthError::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid credentials").into_response(),
        auth::AuthError::Token(e) => {
            tracing::error!(error = %e, "token issuance failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        auth::AuthError::Db(e) => {
            tracing::error!(error = %e, "auth query failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
