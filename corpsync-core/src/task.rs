//! Tasks and their comment threads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{CommentId, DeptId, TaskId, UserId};

/// Status of a task in its review workflow.
///
/// The legal transitions are enforced by [`crate::workflow`]; this type is
/// just the value. Wire names match the credential-era frontend
/// (`TODO`, `IN_PROGRESS`, `REVIEW`, `DONE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Created but not started.
    Todo,
    /// Actively being worked on by the assignee.
    InProgress,
    /// Submitted by the assignee, awaiting manager review.
    Review,
    /// Approved. Terminal: no further transitions.
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Todo => write!(f, "TODO"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Review => write!(f, "REVIEW"),
            Self::Done => write!(f, "DONE"),
        }
    }
}

/// Task priority, totally ordered for sorting (`Low < Critical`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    /// Nice to have.
    Low,
    /// Default priority.
    Medium,
    /// Needs attention soon.
    High,
    /// Drop everything.
    Critical,
}

/// A single comment on a task.
///
/// Comments are append-only and owned exclusively by their parent task;
/// there is no edit or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier.
    pub id: CommentId,
    /// Comment body.
    pub text: String,
    /// Who wrote it.
    pub author_id: UserId,
    /// When it was appended.
    pub created_at: DateTime<Utc>,
}

/// A task tracked by the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Short title.
    pub title: String,
    /// Longer free-form description.
    pub description: String,
    /// Current workflow status.
    pub status: TaskStatus,
    /// Sorting priority.
    pub priority: TaskPriority,
    /// The assignee (a `User` id; referenced, not owned).
    pub assigned_to: UserId,
    /// Who created the task.
    pub created_by: UserId,
    /// Department the task belongs to.
    pub department_id: DeptId,
    /// Due date.
    pub deadline: NaiveDate,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// Comment thread, strictly in append order.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Reason given on the most recent rejection.
    ///
    /// Set when a reviewer sends the task back from REVIEW to IN_PROGRESS,
    /// cleared when the assignee resubmits for review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}
