//! The JSON credential store.
//!
//! A read-only list of accounts on disk: `{ "users": [ ... ] }`, each
//! record carrying a bcrypt password hash. The file is read fresh on
//! every lookup so the server stays stateless per request; concurrent
//! logins are independent and order-insensitive.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use corpsync_core::User;
use corpsync_core::id::{DeptId, UserId};
use corpsync_core::role::Role;

/// Errors that can occur when reading the credential file.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Failed to read the credential file.
    #[error("failed to read credential file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the credential file JSON.
    #[error("failed to parse credential file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One account in the credential file.
///
/// `password` is always the bcrypt hash, never a plaintext password;
/// [`CredentialRecord::into_public`] strips it before anything leaves
/// the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, looked up by exact match.
    pub email: String,
    /// bcrypt password hash.
    pub password: String,
    /// Access role.
    pub role: Role,
    /// Department for role-scoped accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DeptId>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// External GitHub handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl CredentialRecord {
    /// Converts this record into the public user shape, dropping the
    /// password hash.
    #[must_use]
    pub fn into_public(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            department_id: self.department_id,
            avatar: self.avatar,
            github: self.github,
        }
    }
}

/// On-disk layout of the credential file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CredentialFile {
    /// All accounts.
    pub users: Vec<CredentialRecord>,
}

/// Read-only handle to the credential file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Creates a store backed by the given file path. The file is not
    /// touched until the first lookup.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole credential file.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] if the file cannot be read or parsed.
    pub fn load(&self) -> Result<CredentialFile, CredentialError> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| CredentialError::ReadFile {
                path: self.path.clone(),
                source: e,
            })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Finds an account by exact email match.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] if the file cannot be read or parsed.
    pub fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>, CredentialError> {
        let file = self.load()?;
        Ok(file.users.into_iter().find(|u| u.email == email))
    }

    /// Finds an account by user id.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] if the file cannot be read or parsed.
    pub fn find_by_id(&self, id: &str) -> Result<Option<CredentialRecord>, CredentialError> {
        let file = self.load()?;
        Ok(file.users.into_iter().find(|u| u.id.as_str() == id))
    }
}
