//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! All API endpoints live under `/api` and are stitched into a single Axum
//! router with permissive CORS, matching what the browser client expects
//! when served from a different origin. `/healthz` is the only
//! unauthenticated route besides login, registration, and validation.

pub mod auth;
pub mod dashboard;
pub mod officers;
pub mod payments;
pub mod proposals;
pub mod users;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/auth/register/user", post(auth::register_user))
        .route("/api/auth/register/officer", post(auth::register_officer))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/validate", get(auth::validate))
        .route("/api/user", get(users::list_users))
        .route("/api/user/me", get(users::current_user))
        .route(
            "/api/user/{id}",
            get(users::get_user).put(users::update_user).delete(users::delete_user),
        )
        .route("/api/proposals", get(proposals::list_proposals))
        .route("/api/proposals/submit/{user_id}", post(proposals::submit_proposal))
        .route("/api/proposals/user/{user_id}", get(proposals::list_user_proposals))
        .route(
            "/api/proposals/{id}",
            get(proposals::get_proposal).delete(proposals::delete_proposal),
        )
        .route("/api/payments/process", post(payments::process_payment))
        .route("/api/payments/user/{user_id}", get(payments::payment_history))
        .route("/api/payments/claim", post(payments::file_claim))
        .route("/api/payments/claims", get(payments::list_claims))
        .route("/api/payments/claims/user/{user_id}", get(payments::list_user_claims))
        .route("/api/payments/claim/{claim_id}/status", put(payments::update_claim_status))
        .route("/api/officer", get(officers::list_officers))
        .route(
            "/api/officer/{id}",
            get(officers::get_officer).delete(officers::delete_officer),
        )
        .route("/api/dashboard/stats", get(dashboard::stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
