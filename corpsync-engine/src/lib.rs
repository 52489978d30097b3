//! In-memory workspace state for `CorpSync`.
//!
//! A [`Workspace`] owns the user/department directory and the task store
//! for one process. It is constructed once at startup and passed by
//! reference to whatever consumes it; there are no module-level
//! singletons. Identifier generation and timestamps are injectable
//! capabilities so tests can run deterministically.
//!
//! All state is volatile: nothing here persists across a restart.

pub mod capabilities;
pub mod seed;
pub mod workspace;

pub use capabilities::{Clock, FixedClock, IdGen, SequenceIds, SystemClock, UuidIds};
pub use workspace::{NewDepartment, NewTask, NewUser, Workspace, WorkspaceError};
