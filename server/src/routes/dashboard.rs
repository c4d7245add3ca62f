//! Review dashboard statistics.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use sqlx::Row;

use crate::routes::auth::AuthUser;
use crate::services::auth::Role;
use crate::state::AppState;

/// Aggregate counters shown on the officer dashboard. Every field is
/// computed live from the database on each request.
#[derive(Debug, Serialize)]
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

/// `GET /api/dashboard/stats` — live review statistics (OFFICER+).
pub async fn stats(State(state): State<AppState>, auth: AuthUser) -> Result<Json<DashboardStats>, StatusCode> {
    auth.require(Role::Officer)?;

    let claims = sqlx::query(
        r"SELECT
              COUNT(*) FILTER (WHERE status = 'PENDING')      AS pending,
              COUNT(*) FILTER (WHERE status = 'UNDER_REVIEW') AS under_review,
              COUNT(*) FILTER (WHERE status = 'APPROVED')     AS approved,
              COUNT(*) FILTER (WHERE status = 'REJECTED')     AS rejected
          FROM claims",
    )
    .fetch_one(&state.pool)
    .await
    .map_err(dashboard_query_failed)?;

    let proposals = sqlx::query(
        r"SELECT
              COUNT(*) AS total,
              COUNT(*) FILTER (WHERE status = 'ACTIVE') AS active,
              COALESCE(SUM(premium_amount) FILTER (WHERE status = 'ACTIVE'), 0) AS total_premium
          FROM proposals",
    )
    .fetch_one(&state.pool)
    .await
    .map_err(dashboard_query_failed)?;

    let registered_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&state.pool)
        .await
        .map_err(dashboard_query_failed)?;

    Ok(Json(DashboardStats {
        pending_claims: claims.get("pending"),
        under_review_claims: claims.get("under_review"),
        approved_claims: claims.get("approved"),
        rejected_claims: claims.get("rejected"),
        total_proposals_reviewed: proposals.get("total"),
        active_policies: proposals.get("active"),
        total_premium: proposals.get("total_premium"),
        registered_users,
    }))
}

fn dashboard_query_failed(err: sqlx::Error) -> StatusCode {
    tracing::error!(error = %err, "dashboard stats query failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
