//! Access roles.

use serde::{Deserialize, Serialize};

/// Access role attached to every account.
///
/// The wire names (`SUPER_ADMIN`, `ADMIN_MANAGER`, `EMPLOYEE`) match the
/// credential file and the session token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Global administrator: sees and manages everything.
    SuperAdmin,
    /// Department manager: scoped to their own department.
    AdminManager,
    /// Regular employee: scoped to their own assignments.
    Employee,
}

impl Role {
    /// Whether this role can approve or reject tasks in review.
    #[must_use]
    pub const fn can_review(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::AdminManager)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "SUPER_ADMIN"),
            Self::AdminManager => write!(f, "ADMIN_MANAGER"),
            Self::Employee => write!(f, "EMPLOYEE"),
        }
    }
}
