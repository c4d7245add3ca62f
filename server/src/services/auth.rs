//! Registration, login, and the role ladder.
//!
//! DESIGN
//! ======
//! Policyholders and officers live in separate tables, and the login
//! request's `userType` picks which one is checked. Roles form a ladder
//! (USER < OFFICER < ADMIN); a requirement is satisfied by the required
//! role or anything above it, mirroring the access rules the web client
//! enforces.
//!
//! ERROR HANDLING
//! ==============
//! Login failures collapse into a single `InvalidCredentials` variant so
//! responses never reveal whether the email, the password, or the account
//! type was wrong.

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::password;
use crate::services::token::{self, TokenConfig};

// =============================================================================
// ROLES
// =============================================================================

/// Access roles. `Ord` follows the USER < OFFICER < ADMIN ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
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

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid date of birth")]
    InvalidDate,
    #[error("email already exists")]
    EmailExists,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("token error: {0}")]
    Token(#[from] token::TokenError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Registration payload for a policyholder account.
#[derive(Debug, Clone)]
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

/// Registration payload for a staff account.
#[derive(Debug, Clone)]
pub struct NewOfficer {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Email, role, and signed token returned on successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub email: String,
    pub role: Role,
}

// =============================================================================
// VALIDATION
// =============================================================================

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Validate an ISO `YYYY-MM-DD` date string.
#[must_use]
pub fn is_iso_date(s: &str) -> bool {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    time::Date::parse(s, format).is_ok()
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error().is_some_and(|db| db.is_unique_violation())
}

// =============================================================================
// REGISTRATION
// =============================================================================

/// Register a policyholder account. Returns the new row's id.
///
/// # Errors
///
/// `InvalidEmail` for malformed emails, `EmailExists` for duplicates.
pub async fn register_user(pool: &PgPool, new_user: &NewUser) -> Result<Uuid, AuthError> {
    let email = normalize_email(&new_user.email).ok_or(AuthError::InvalidEmail)?;
    if !is_iso_date(&new_user.date_of_birth) {
        return Err(AuthError::InvalidDate);
    }

    let salt = password::generate_salt();
    let hash = password::hash_password(&new_user.password, &salt);
    let id = Uuid::new_v4();

    let result = sqlx::query(
        r"INSERT INTO users
              (id, name, email, password_hash, password_salt,
               address, date_of_birth, aadhaar_number, pan_number, role)
          VALUES ($1, $2, $3, $4, $5, $6, $7::date, $8, $9, 'USER')",
    )
    .bind(id)
    .bind(&new_user.name)
    .bind(&email)
    .bind(hash)
    .bind(salt)
    .bind(&new_user.address)
    .bind(&new_user.date_of_birth)
    .bind(&new_user.aadhaar_number)
    .bind(&new_user.pan_number)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(id),
        Err(e) if is_unique_violation(&e) => Err(AuthError::EmailExists),
        Err(e) => Err(AuthError::Db(e)),
    }
}

/// Register a staff account with the given role. Returns the new row's id.
///
/// # Errors
///
/// `InvalidEmail` for malformed emails, `EmailExists` for duplicates.
pub async fn register_officer(pool: &PgPool, new_officer: &NewOfficer) -> Result<Uuid, AuthError> {
    let email = normalize_email(&new_officer.email).ok_or(AuthError::InvalidEmail)?;

    let salt = password::generate_salt();
    let hash = password::hash_password(&new_officer.password, &salt);
    let id = Uuid::new_v4();

    let result = sqlx::query(
        r"INSERT INTO officers (id, name, email, password_hash, password_salt, role)
          VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(id)
    .bind(&new_officer.name)
    .bind(&email)
    .bind(hash)
    .bind(salt)
    .bind(new_officer.role.as_str())
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(id),
        Err(e) if is_unique_violation(&e) => Err(AuthError::EmailExists),
        Err(e) => Err(AuthError::Db(e)),
    }
}

// =============================================================================
// LOGIN
// =============================================================================

/// Authenticate an account and issue a signed token.
///
/// `user_type` selects the table checked: USER looks at policyholders,
/// OFFICER and ADMIN look at staff. An account logging in as ADMIN must
/// actually hold the ADMIN role; requesting a lower type than held is fine.
///
/// # Errors
///
/// `InvalidCredentials` when the email is unknown in the selected table,
/// the password is wrong, or the stored role does not cover `user_type`.
pub async fn login(
    pool: &PgPool,
    tokens: &TokenConfig,
    email: &str,
    login_password: &str,
    user_type: Role,
) -> Result<LoginOutcome, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidCredentials)?;

    let sql = match user_type {
        Role::User => "SELECT password_hash, password_salt, role FROM users WHERE email = $1",
        Role::Officer | Role::Admin => "SELECT password_hash, password_salt, role FROM officers WHERE email = $1",
    };
    let row = sqlx::query(sql).bind(&email).fetch_optional(pool).await?;
    let Some(row) = row else {
        return Err(AuthError::InvalidCredentials);
    };

    let hash: String = row.get("password_hash");
    let salt: String = row.get("password_salt");
    if !password::verify_password(login_password, &salt, &hash) {
        return Err(AuthError::InvalidCredentials);
    }

    let stored_role: String = row.get("role");
    let role = Role::from_str(&stored_role).ok_or(AuthError::InvalidCredentials)?;
    if !role.satisfies(user_type) {
        return Err(AuthError::InvalidCredentials);
    }

    let token = token::issue(tokens, &email, role)?;
    Ok(LoginOutcome { token, email, role })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
