//! Password hashing for account credentials.
//!
//! Each account stores a random per-account salt alongside a SHA-256 digest
//! of salt + password, both as lowercase hex.

use std::fmt::Write;

use rand::Rng;
use sha2::{Digest, Sha256};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a random 16-byte hex salt.
#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Digest a password under the given salt.
#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(hasher.finalize().as_slice())
}

/// Check a candidate password against a stored salt and digest.
#[must_use]
pub fn verify_password(password: &str, salt: &str, stored_hash: &str) -> bool {
    hash_password(password, salt) == stored_hash
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
