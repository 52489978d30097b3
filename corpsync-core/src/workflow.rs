//! Guarded task-status transitions.
//!
//! The workflow is a small state machine over [`TaskStatus`]:
//!
//! ```text
//! TODO -> IN_PROGRESS -> REVIEW -> DONE
//!                ^          |
//!                +----------+  (reject, with mandatory reason)
//! ```
//!
//! The first two transitions belong to the assignee; approval and
//! rejection belong to reviewers (managers and super admins). Everything
//! else is rejected before any state is touched: a failed call leaves the
//! task exactly as it was.

use thiserror::Error;

use crate::task::{Task, TaskStatus};
use crate::user::User;

/// Errors produced by [`apply_transition`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// The requested transition is not part of the workflow.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition {
        /// Status the task was in.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },
    /// Rejection requires a non-empty reason.
    #[error("rejection reason must not be empty")]
    MissingRejectionReason,
    /// The actor is not allowed to perform this transition.
    #[error("user {actor} may not perform this transition")]
    NotPermitted {
        /// Id of the actor that attempted the transition.
        actor: String,
    },
}

/// Validates and applies a status transition on `task`.
///
/// `reason` is consumed only by the rejection path (REVIEW back to
/// IN_PROGRESS) and must be non-blank there; it is ignored everywhere
/// else. Resubmitting for review clears any reason left over from an
/// earlier rejection, so a stored reason always refers to the current
/// IN_PROGRESS stint.
///
/// # Errors
///
/// Returns [`WorkflowError::InvalidTransition`] for any pair of statuses
/// outside the four workflow edges, [`WorkflowError::NotPermitted`] when
/// the actor guard fails, and [`WorkflowError::MissingRejectionReason`]
/// when rejecting without a usable reason. The task is never modified on
/// an error return.
pub fn apply_transition(
    task: &mut Task,
    actor: &User,
    target: TaskStatus,
    reason: Option<&str>,
) -> Result<(), WorkflowError> {
    match (task.status, target) {
        (TaskStatus::Todo, TaskStatus::InProgress) => {
            require_assignee(task, actor)?;
            task.status = TaskStatus::InProgress;
            Ok(())
        }
        (TaskStatus::InProgress, TaskStatus::Review) => {
            require_assignee(task, actor)?;
            task.status = TaskStatus::Review;
            task.rejection_reason = None;
            Ok(())
        }
        (TaskStatus::Review, TaskStatus::Done) => {
            require_reviewer(actor)?;
            task.status = TaskStatus::Done;
            Ok(())
        }
        (TaskStatus::Review, TaskStatus::InProgress) => {
            require_reviewer(actor)?;
            let reason = reason.map(str::trim).filter(|r| !r.is_empty());
            let Some(reason) = reason else {
                return Err(WorkflowError::MissingRejectionReason);
            };
            task.status = TaskStatus::InProgress;
            task.rejection_reason = Some(reason.to_string());
            Ok(())
        }
        (from, to) => Err(WorkflowError::InvalidTransition { from, to }),
    }
}

fn require_assignee(task: &Task, actor: &User) -> Result<(), WorkflowError> {
    if actor.id == task.assigned_to {
        Ok(())
    } else {
        Err(WorkflowError::NotPermitted {
            actor: actor.id.to_string(),
        })
    }
}

fn require_reviewer(actor: &User) -> Result<(), WorkflowError> {
    if actor.role.can_review() {
        Ok(())
    } else {
        Err(WorkflowError::NotPermitted {
            actor: actor.id.to_string(),
        })
    }
}
