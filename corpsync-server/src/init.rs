//! Credential file initialization.
//!
//! Hashes the plaintext seed passwords with bcrypt and writes the JSON
//! credential file the server reads at login time. Run once via the
//! `corpsync-init-db` binary; the server itself never writes the file.

use std::path::{Path, PathBuf};

use corpsync_core::id::{DeptId, UserId};
use corpsync_core::role::Role;

use crate::credentials::{CredentialFile, CredentialRecord};

/// Errors that can occur while writing the credential file.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// Password hashing failed.
    #[error("failed to hash seed password: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Serializing the credential file failed.
    #[error("failed to serialize credential file: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the credential file failed.
    #[error("failed to write credential file {path}: {source}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// A seed account before hashing: the credential record fields plus the
/// plaintext password.
#[derive(Debug, Clone)]
pub struct SeedAccount {
    /// The account as it will appear in the credential file, with the
    /// password field still blank.
    pub record: CredentialRecord,
    /// Plaintext password to hash.
    pub password: String,
}

fn account(
    id: &str,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
    department_id: Option<&str>,
    avatar_seed: &str,
    github: Option<&str>,
) -> SeedAccount {
    SeedAccount {
        record: CredentialRecord {
            id: UserId::from(id),
            name: name.to_string(),
            email: email.to_string(),
            password: String::new(),
            role,
            department_id: department_id.map(DeptId::from),
            avatar: Some(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={avatar_seed}"
            )),
            github: github.map(str::to_string),
        },
        password: password.to_string(),
    }
}

/// The six demo accounts, matching the engine's seed directory.
#[must_use]
pub fn seed_accounts() -> Vec<SeedAccount> {
    vec![
        account(
            "1",
            "Super Admin",
            "super@corporate.com",
            "admin123",
            Role::SuperAdmin,
            None,
            "Lucky",
            None,
        ),
        account(
            "2",
            "Sarah Manager",
            "sarah@corporate.com",
            "manager123",
            Role::AdminManager,
            Some("dept-1"),
            "Sarah",
            Some("sarah-codes"),
        ),
        account(
            "3",
            "John Doe",
            "john@corporate.com",
            "employee123",
            Role::Employee,
            Some("dept-1"),
            "John",
            Some("johndoe-dev"),
        ),
        account(
            "4",
            "Michael Scott",
            "michael@corporate.com",
            "manager123",
            Role::AdminManager,
            Some("dept-2"),
            "Michael",
            None,
        ),
        account(
            "5",
            "Pam Beesly",
            "pam@corporate.com",
            "employee123",
            Role::Employee,
            Some("dept-2"),
            "Pam",
            None,
        ),
        account(
            "6",
            "Kelly Design",
            "kelly@corporate.com",
            "manager123",
            Role::AdminManager,
            Some("dept-3"),
            "Kelly",
            None,
        ),
    ]
}

/// Hashes the seed passwords with the given bcrypt cost and writes the
/// credential file. Returns the number of accounts written.
///
/// # Errors
///
/// Returns [`InitError`] if hashing, serialization, or the write fails.
pub fn write_credentials(path: &Path, cost: u32) -> Result<usize, InitError> {
    let users = hash_accounts(seed_accounts(), cost)?;
    let count = users.len();
    let file = CredentialFile { users };
    let json = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, json).map_err(|e| InitError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(count)
}

/// Hashes each account's plaintext password into its record.
///
/// # Errors
///
/// Returns [`InitError::Hash`] if bcrypt rejects the cost or fails.
pub fn hash_accounts(
    accounts: Vec<SeedAccount>,
    cost: u32,
) -> Result<Vec<CredentialRecord>, InitError> {
    accounts
        .into_iter()
        .map(|account| {
            let mut record = account.record;
            record.password = bcrypt::hash(&account.password, cost)?;
            Ok(record)
        })
        .collect()
}
