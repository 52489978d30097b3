//! User accounts.

use serde::{Deserialize, Serialize};

use crate::id::{DeptId, UserId};
use crate::role::Role;

/// A user account in the directory.
///
/// `department_id` is required for managers and employees and absent for
/// super admins; the engine enforces this at creation time. The record
/// never carries credentials — password hashes live only in the server's
/// credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique within the directory.
    pub email: String,
    /// Access role.
    pub role: Role,
    /// Department the user belongs to, if role-scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DeptId>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// External GitHub handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}
