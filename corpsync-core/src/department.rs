//! Departments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{DeptId, UserId};

/// An organizational department.
///
/// `manager_id` is expected to reference an `ADMIN_MANAGER` user but the
/// reference is by id only; there is no embedded ownership and the user
/// may be deleted independently (the engine then clears this field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Unique department identifier.
    pub id: DeptId,
    /// Department name.
    pub name: String,
    /// Short description of the department's remit.
    pub description: String,
    /// The managing user, if one is assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<UserId>,
    /// When the department was created.
    pub created_at: DateTime<Utc>,
}
