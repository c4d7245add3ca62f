//! Staff accounts — review officers and admins.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum OfficerError {
    #[error("officer not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Staff profile as served by the API.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

fn row_to_officer(row: &PgRow) -> OfficerRow {
    OfficerRow {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        role: row.get("role"),
        created_at: row.get("created_at"),
    }
}

/// List every staff account, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_officers(pool: &PgPool) -> Result<Vec<OfficerRow>, OfficerError> {
    let rows = sqlx::query(
        r"SELECT id, name, email, role,
                 to_char(created_at, 'YYYY-MM-DD') AS created_at
          FROM officers
          ORDER BY created_at DESC, email",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_officer).collect())
}

/// Fetch one staff account by id.
///
/// # Errors
///
/// `NotFound` when no row matches.
pub async fn get_officer(pool: &PgPool, officer_id: Uuid) -> Result<OfficerRow, OfficerError> {
    let row = sqlx::query(
        r"SELECT id, name, email, role,
                 to_char(created_at, 'YYYY-MM-DD') AS created_at
          FROM officers
          WHERE id = $1",
    )
    .bind(officer_id)
    .fetch_optional(pool)
    .await?
    .ok_or(OfficerError::NotFound(officer_id))?;

    Ok(row_to_officer(&row))
}

/// Delete a staff account.
///
/// # Errors
///
/// `NotFound` when no row matches.
pub async fn delete_officer(pool: &PgPool, officer_id: Uuid) -> Result<(), OfficerError> {
    let result = sqlx::query("DELETE FROM officers WHERE id = $1")
        .bind(officer_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(OfficerError::NotFound(officer_id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "officer_test.rs"]
mod tests;
