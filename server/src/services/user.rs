//! Policyholder accounts — listing, lookup, profile updates, deletion.
//!
//! Password material stays in the table; row types returned here carry only
//! profile fields and are serialized straight onto the wire.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::auth;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user not found: {0}")]
    NotFound(Uuid),
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid date of birth")]
    InvalidDate,
    #[error("email already exists")]
    EmailExists,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Policyholder profile as served by the API.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub address: String,
    /// ISO `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub aadhaar_number: String,
    pub pan_number: String,
    pub role: String,
    pub created_at: String,
}

/// Partial profile update. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    pub aadhaar_number: Option<String>,
    pub pan_number: Option<String>,
}

fn row_to_user(row: &PgRow) -> UserRow {
    UserRow {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        address: row.get("address"),
        date_of_birth: row.get("date_of_birth"),
        aadhaar_number: row.get("aadhaar_number"),
        pan_number: row.get("pan_number"),
        role: row.get("role"),
        created_at: row.get("created_at"),
    }
}

/// List every policyholder, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRow>, UserError> {
    let rows = sqlx::query(
        r"SELECT id, name, email, address,
                 to_char(date_of_birth, 'YYYY-MM-DD') AS date_of_birth,
                 aadhaar_number, pan_number, role,
                 to_char(created_at, 'YYYY-MM-DD') AS created_at
          FROM users
          ORDER BY created_at DESC, email",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_user).collect())
}

/// Fetch one policyholder by id.
///
/// # Errors
///
/// `NotFound` when no row matches.
pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<UserRow, UserError> {
    let row = sqlx::query(
        r"SELECT id, name, email, address,
                 to_char(date_of_birth, 'YYYY-MM-DD') AS date_of_birth,
                 aadhaar_number, pan_number, role,
                 to_char(created_at, 'YYYY-MM-DD') AS created_at
          FROM users
          WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or(UserError::NotFound(user_id))?;

    Ok(row_to_user(&row))
}

/// Resolve a policyholder id from an email, if one exists.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn find_id_by_email(pool: &PgPool, email: &str) -> Result<Option<Uuid>, UserError> {
    let row = sqlx::query("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| r.get("id")))
}

/// Fetch a policyholder by email, if one exists. Officers and admins have no
/// row here, so callers treat `None` as "not a policyholder".
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRow>, UserError> {
    let row = sqlx::query(
        r"SELECT id, name, email, address,
                 to_char(date_of_birth, 'YYYY-MM-DD') AS date_of_birth,
                 aadhaar_number, pan_number, role,
                 to_char(created_at, 'YYYY-MM-DD') AS created_at
          FROM users
          WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row.as_ref().map(row_to_user))
}

/// Apply a partial profile update and return the fresh row.
///
/// # Errors
///
/// `NotFound` when the user does not exist, `InvalidEmail`/`InvalidDate`
/// for malformed replacement values, `EmailExists` when the new email is
/// already taken.
pub async fn update_user(pool: &PgPool, user_id: Uuid, update: &UpdateUser) -> Result<UserRow, UserError> {
    let email = match update.email.as_deref() {
        Some(raw) => Some(auth::normalize_email(raw).ok_or(UserError::InvalidEmail)?),
        None => None,
    };
    if let Some(dob) = update.date_of_birth.as_deref() {
        if !auth::is_iso_date(dob) {
            return Err(UserError::InvalidDate);
        }
    }

    let result = sqlx::query(
        r"UPDATE users SET
              name = COALESCE($2, name),
              email = COALESCE($3, email),
              address = COALESCE($4, address),
              date_of_birth = COALESCE($5::date, date_of_birth),
              aadhaar_number = COALESCE($6, aadhaar_number),
              pan_number = COALESCE($7, pan_number)
          WHERE id = $1
          RETURNING id, name, email, address,
                    to_char(date_of_birth, 'YYYY-MM-DD') AS date_of_birth,
                    aadhaar_number, pan_number, role,
                    to_char(created_at, 'YYYY-MM-DD') AS created_at",
    )
    .bind(user_id)
    .bind(&update.name)
    .bind(email)
    .bind(&update.address)
    .bind(&update.date_of_birth)
    .bind(&update.aadhaar_number)
    .bind(&update.pan_number)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(Some(row)) => Ok(row_to_user(&row)),
        Ok(None) => Err(UserError::NotFound(user_id)),
        Err(e) if e.as_database_error().is_some_and(|db| db.is_unique_violation()) => Err(UserError::EmailExists),
        Err(e) => Err(UserError::Db(e)),
    }
}

/// Delete a policyholder. Proposals, payments, and claims cascade.
///
/// # Errors
///
/// `NotFound` when no row matches.
pub async fn delete_user(pool: &PgPool, user_id: Uuid) -> Result<(), UserError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(UserError::NotFound(user_id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
