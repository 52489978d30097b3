//! String-backed identifier newtypes.
//!
//! Identifiers are opaque strings rather than raw UUIDs because the seed
//! directory uses human-assigned ids (`"1"`, `"dept-1"`, `"t1"`). Freshly
//! created records get collision-resistant ids from an injectable generator
//! in the engine crate; existing ids are carried through untouched.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id! {
    /// Unique identifier for a user account.
    UserId
}

string_id! {
    /// Unique identifier for a department.
    DeptId
}

string_id! {
    /// Unique identifier for a task.
    TaskId
}

string_id! {
    /// Unique identifier for a task comment.
    CommentId
}
