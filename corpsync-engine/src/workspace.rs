//! The workspace: directory and task store behind one mutation API.
//!
//! Every mutation validates first and commits second, so an `Err` return
//! means no state changed. Cross-references between records are by id
//! only; the deletion policy for users with outstanding work is to block
//! the delete rather than leave dangling assignees behind.

use chrono::NaiveDate;
use thiserror::Error;

use corpsync_core::id::{CommentId, DeptId, TaskId, UserId};
use corpsync_core::task::{Comment, Task, TaskPriority, TaskStatus};
use corpsync_core::workflow::{self, WorkflowError};
use corpsync_core::{Department, Role, User, visibility};

use crate::capabilities::{Clock, IdGen, SystemClock, UuidIds};

/// Errors produced by workspace operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkspaceError {
    /// Another user already has this email address.
    #[error("a user with email {0} already exists")]
    DuplicateEmail(String),
    /// Managers and employees must belong to a department.
    #[error("role {0} requires a department")]
    MissingDepartment(Role),
    /// No user with the given id.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// No department with the given id.
    #[error("department not found: {0}")]
    DepartmentNotFound(DeptId),
    /// No task with the given id, or the task is not visible to the caller.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The user still has tasks that are not DONE.
    #[error("user {user} is assigned {open_tasks} unfinished task(s)")]
    UserHasActiveTasks {
        /// The user that was to be deleted.
        user: UserId,
        /// How many of their tasks are not DONE.
        open_tasks: usize,
    },
    /// Comment text must not be blank.
    #[error("comment text must not be empty")]
    EmptyComment,
    /// A status transition was refused by the workflow.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

/// Input for [`Workspace::add_user`].
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address, must be unique.
    pub email: String,
    /// Access role.
    pub role: Role,
    /// Department, required for managers and employees.
    pub department_id: Option<DeptId>,
    /// Avatar image URL.
    pub avatar: Option<String>,
    /// External GitHub handle.
    pub github: Option<String>,
}

/// Input for [`Workspace::add_department`].
#[derive(Debug, Clone)]
pub struct NewDepartment {
    /// Department name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Managing user, if already known.
    pub manager_id: Option<UserId>,
}

/// Input for [`Workspace::add_task`].
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Sorting priority.
    pub priority: TaskPriority,
    /// The assignee.
    pub assigned_to: UserId,
    /// Who is creating the task.
    pub created_by: UserId,
    /// Department the task belongs to.
    pub department_id: DeptId,
    /// Due date.
    pub deadline: NaiveDate,
}

/// In-memory directory and task store for one process.
pub struct Workspace {
    users: Vec<User>,
    departments: Vec<Department>,
    tasks: Vec<Task>,
    ids: Box<dyn IdGen>,
    clock: Box<dyn Clock>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Creates an empty workspace with UUID ids and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capabilities(Box::new(UuidIds), Box::new(SystemClock))
    }

    /// Creates an empty workspace with explicit id and clock capabilities.
    #[must_use]
    pub fn with_capabilities(ids: Box<dyn IdGen>, clock: Box<dyn Clock>) -> Self {
        Self {
            users: Vec::new(),
            departments: Vec::new(),
            tasks: Vec::new(),
            ids,
            clock,
        }
    }

    /// Creates a workspace pre-populated with existing records.
    ///
    /// Used by the seed fixture; the records keep their original ids.
    #[must_use]
    pub fn from_records(
        users: Vec<User>,
        departments: Vec<Department>,
        tasks: Vec<Task>,
        ids: Box<dyn IdGen>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            users,
            departments,
            tasks,
            ids,
            clock,
        }
    }

    /// All users, in insertion order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All departments, in insertion order.
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// All tasks, unfiltered. Callers rendering task data must go through
    /// [`Workspace::visible_tasks`] instead.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a user by id.
    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == *id)
    }

    /// Looks up a department by id.
    #[must_use]
    pub fn department(&self, id: &DeptId) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == *id)
    }

    /// Looks up a task by id, without a visibility check.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    /// Adds a user to the directory.
    ///
    /// Role-scoped users (managers, employees) must reference an existing
    /// department; any department handed in for a super admin is dropped.
    ///
    /// # Errors
    ///
    /// [`WorkspaceError::DuplicateEmail`] if the email is taken,
    /// [`WorkspaceError::MissingDepartment`] if a scoped role has no
    /// department, [`WorkspaceError::DepartmentNotFound`] if the referenced
    /// department does not exist.
    pub fn add_user(&mut self, new: NewUser) -> Result<User, WorkspaceError> {
        if self.users.iter().any(|u| u.email == new.email) {
            return Err(WorkspaceError::DuplicateEmail(new.email));
        }
        let department_id = match new.role {
            Role::SuperAdmin => None,
            Role::AdminManager | Role::Employee => {
                let Some(dept) = new.department_id else {
                    return Err(WorkspaceError::MissingDepartment(new.role));
                };
                if self.department(&dept).is_none() {
                    return Err(WorkspaceError::DepartmentNotFound(dept));
                }
                Some(dept)
            }
        };

        let user = User {
            id: UserId::new(self.ids.next_id()),
            name: new.name,
            email: new.email,
            role: new.role,
            department_id,
            avatar: new.avatar,
            github: new.github,
        };
        tracing::debug!(user = %user.id, role = %user.role, "user added");
        self.users.push(user.clone());
        Ok(user)
    }

    /// Removes a user from the directory.
    ///
    /// Deletion is blocked while the user is assigned any task that is not
    /// DONE, so task assignees can never dangle. Department manager
    /// references pointing at the user are cleared.
    ///
    /// # Errors
    ///
    /// [`WorkspaceError::UserNotFound`] if no such user,
    /// [`WorkspaceError::UserHasActiveTasks`] if they still have
    /// unfinished assignments.
    pub fn delete_user(&mut self, id: &UserId) -> Result<User, WorkspaceError> {
        let Some(index) = self.users.iter().position(|u| u.id == *id) else {
            return Err(WorkspaceError::UserNotFound(id.clone()));
        };
        let open_tasks = self
            .tasks
            .iter()
            .filter(|t| t.assigned_to == *id && t.status != TaskStatus::Done)
            .count();
        if open_tasks > 0 {
            return Err(WorkspaceError::UserHasActiveTasks {
                user: id.clone(),
                open_tasks,
            });
        }
        for dept in &mut self.departments {
            if dept.manager_id.as_ref() == Some(id) {
                dept.manager_id = None;
            }
        }
        let user = self.users.remove(index);
        tracing::debug!(user = %user.id, "user deleted");
        Ok(user)
    }

    /// Adds a department.
    ///
    /// # Errors
    ///
    /// [`WorkspaceError::UserNotFound`] if a manager is named but does not
    /// exist in the directory.
    pub fn add_department(&mut self, new: NewDepartment) -> Result<Department, WorkspaceError> {
        if let Some(manager) = &new.manager_id {
            if self.user(manager).is_none() {
                return Err(WorkspaceError::UserNotFound(manager.clone()));
            }
        }
        let dept = Department {
            id: DeptId::new(self.ids.next_id()),
            name: new.name,
            description: new.description,
            manager_id: new.manager_id,
            created_at: self.clock.now(),
        };
        tracing::debug!(department = %dept.id, "department added");
        self.departments.push(dept.clone());
        Ok(dept)
    }

    /// Returns the users belonging to a department.
    ///
    /// # Errors
    ///
    /// [`WorkspaceError::DepartmentNotFound`] if no such department.
    pub fn department_members(&self, id: &DeptId) -> Result<Vec<&User>, WorkspaceError> {
        let dept = self
            .department(id)
            .ok_or_else(|| WorkspaceError::DepartmentNotFound(id.clone()))?;
        Ok(visibility::department_members(dept, &self.users))
    }

    /// Creates a task. New tasks always start in TODO with an empty
    /// comment thread and no rejection reason.
    ///
    /// # Errors
    ///
    /// [`WorkspaceError::UserNotFound`] if the assignee or creator does
    /// not exist, [`WorkspaceError::DepartmentNotFound`] if the department
    /// does not exist.
    pub fn add_task(&mut self, new: NewTask) -> Result<Task, WorkspaceError> {
        if self.user(&new.assigned_to).is_none() {
            return Err(WorkspaceError::UserNotFound(new.assigned_to));
        }
        if self.user(&new.created_by).is_none() {
            return Err(WorkspaceError::UserNotFound(new.created_by));
        }
        if self.department(&new.department_id).is_none() {
            return Err(WorkspaceError::DepartmentNotFound(new.department_id));
        }
        let task = Task {
            id: TaskId::new(self.ids.next_id()),
            title: new.title,
            description: new.description,
            status: TaskStatus::Todo,
            priority: new.priority,
            assigned_to: new.assigned_to,
            created_by: new.created_by,
            department_id: new.department_id,
            deadline: new.deadline,
            created_at: self.clock.now(),
            comments: Vec::new(),
            rejection_reason: None,
        };
        tracing::debug!(task = %task.id, assignee = %task.assigned_to, "task created");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Applies a workflow transition to a task on behalf of `actor`.
    ///
    /// Returns the updated task. On any error the task is unchanged.
    ///
    /// # Errors
    ///
    /// [`WorkspaceError::UserNotFound`] / [`WorkspaceError::TaskNotFound`]
    /// for missing records, and [`WorkspaceError::Workflow`] for anything
    /// the workflow refuses.
    pub fn transition_task(
        &mut self,
        task_id: &TaskId,
        actor_id: &UserId,
        target: TaskStatus,
        reason: Option<&str>,
    ) -> Result<Task, WorkspaceError> {
        let actor = self
            .user(actor_id)
            .ok_or_else(|| WorkspaceError::UserNotFound(actor_id.clone()))?
            .clone();
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == *task_id) else {
            return Err(WorkspaceError::TaskNotFound(task_id.clone()));
        };
        workflow::apply_transition(task, &actor, target, reason)?;
        tracing::debug!(task = %task.id, status = %task.status, actor = %actor.id, "task transitioned");
        Ok(task.clone())
    }

    /// Appends a comment to a task the author can see.
    ///
    /// Comments are strictly append-only: insertion order is display
    /// order, and nothing ever removes or reorders them.
    ///
    /// # Errors
    ///
    /// [`WorkspaceError::UserNotFound`] if the author does not exist,
    /// [`WorkspaceError::TaskNotFound`] if the task does not exist *or*
    /// is outside the author's visibility (existence is not leaked),
    /// [`WorkspaceError::EmptyComment`] for blank text.
    pub fn add_comment(
        &mut self,
        task_id: &TaskId,
        author_id: &UserId,
        text: &str,
    ) -> Result<Comment, WorkspaceError> {
        if text.trim().is_empty() {
            return Err(WorkspaceError::EmptyComment);
        }
        let author = self
            .user(author_id)
            .ok_or_else(|| WorkspaceError::UserNotFound(author_id.clone()))?
            .clone();
        let comment = Comment {
            id: CommentId::new(self.ids.next_id()),
            text: text.to_string(),
            author_id: author.id.clone(),
            created_at: self.clock.now(),
        };
        let Some(task) = self
            .tasks
            .iter_mut()
            .find(|t| t.id == *task_id && visibility::can_see(&author, t))
        else {
            return Err(WorkspaceError::TaskNotFound(task_id.clone()));
        };
        task.comments.push(comment.clone());
        tracing::debug!(task = %task.id, author = %author.id, "comment appended");
        Ok(comment)
    }

    /// Returns the tasks `viewer` may see, in store order.
    ///
    /// # Errors
    ///
    /// [`WorkspaceError::UserNotFound`] if the viewer does not exist.
    pub fn visible_tasks(&self, viewer_id: &UserId) -> Result<Vec<&Task>, WorkspaceError> {
        let viewer = self
            .user(viewer_id)
            .ok_or_else(|| WorkspaceError::UserNotFound(viewer_id.clone()))?;
        Ok(visibility::visible_tasks(viewer, &self.tasks))
    }
}
