//! Login session state and on-disk persistence.
//!
//! A `Session` holds the bearer token plus the identity it was issued to,
//! and can be saved to a small JSON file so a CLI login survives across
//! invocations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::Role;

const SESSION_DIR: &str = "autosure";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session file io: {0}")]
    Io(#[from] io::Error),
    #[error("session file decode: {0}")]
    Json(#[from] serde_json::Error),
}

/// An authenticated identity, empty until `log_in`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
    email: Option<String>,
    role: Option<Role>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a successful login.
    pub fn log_in(&mut self, token: String, email: String, role: Role) {
        self.token = Some(token);
        self.email = Some(email);
        self.role = Some(role);
    }

    /// Forget the stored identity.
    pub fn log_out(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Role ladder check; an unauthenticated session holds no role.
    #[must_use]
    pub fn has_role(&self, required: Role) -> bool {
        self.role.is_some_and(|role| role.satisfies(required))
    }

    /// `Authorization` header value for the stored token.
    #[must_use]
    pub fn bearer_header(&self) -> Option<String> {
        self.token.as_deref().map(|token| format!("Bearer {token}"))
    }

    /// Default on-disk location (`~/.config/autosure/session.json`).
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(SESSION_DIR)
            .join(SESSION_FILE)
    }

    /// Load a saved session. A missing file yields an empty session.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist to disk, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Delete the saved session file; a missing file is fine.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be removed.
    pub fn remove(path: &Path) -> Result<(), SessionError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
