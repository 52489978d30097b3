//! Shared domain model for `CorpSync`.
//!
//! Defines the user/department/task records, the role-based visibility
//! filter, and the guarded task-status workflow. This crate is pure data
//! and logic: no I/O, no async, no global state.

pub mod department;
pub mod id;
pub mod role;
pub mod task;
pub mod user;
pub mod visibility;
pub mod workflow;

pub use department::Department;
pub use id::{CommentId, DeptId, TaskId, UserId};
pub use role::Role;
pub use task::{Comment, Task, TaskPriority, TaskStatus};
pub use user::User;
pub use visibility::{can_see, department_members, visible_tasks};
pub use workflow::{WorkflowError, apply_transition};
