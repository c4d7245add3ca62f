//! Bearer token issue and verification.
//!
//! DESIGN
//! ======
//! Tokens are HS256 JWTs carrying the account email (`sub`) and role. The
//! signing secret and lifetime come from the environment so deployments can
//! rotate them without a rebuild. Verification rejects bad signatures and
//! expired tokens in one step; callers never see partial claims.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::services::auth::Role;

const DEFAULT_TTL_SECONDS: i64 = 86_400;

/// Token signing configuration loaded from environment.
#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
    ttl_seconds: i64,
}

impl TokenConfig {
    /// Load from `JWT_SECRET` and `JWT_TTL_SECONDS` (default 24h).
    /// Returns `None` if the secret is missing.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let secret = std::env::var("JWT_SECRET").ok()?;
        let ttl_seconds = std::env::var("JWT_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TTL_SECONDS);
        Some(Self { secret, ttl_seconds })
    }

    #[must_use]
    pub fn new(secret: impl Into<String>, ttl_seconds: i64) -> Self {
        Self { secret: secret.into(), ttl_seconds }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encode(jsonwebtoken::errors::Error),
    #[error("invalid token")]
    Invalid,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// Identity carried by a verified token.
#[derive(Debug, Clone)]
pub struct TokenIdentity {
    pub email: String,
    pub role: Role,
}

/// Issue a signed token for the given account.
///
/// # Errors
///
/// Returns an error if claim serialization or signing fails.
pub fn issue(config: &TokenConfig, email: &str, role: Role) -> Result<String, TokenError> {
    let now = time::OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        sub: email.to_owned(),
        role: role.as_str().to_owned(),
        iat: now,
        exp: now + config.ttl_seconds,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(TokenError::Encode)
}

/// Verify a token's signature and expiry, returning the identity it carries.
///
/// # Errors
///
/// Returns `TokenError::Invalid` for bad signatures, expired tokens, and
/// unrecognized role claims.
pub fn verify(config: &TokenConfig, token: &str) -> Result<TokenIdentity, TokenError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(token, &DecodingKey::from_secret(config.secret.as_bytes()), &validation)
        .map_err(|_| TokenError::Invalid)?;

    let role = Role::from_str(&data.claims.role).ok_or(TokenError::Invalid)?;
    Ok(TokenIdentity { email: data.claims.sub, role })
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
