//! Role-based task visibility.
//!
//! This is the read-authorization boundary: every place that renders or
//! returns task data must go through the same filter, so it is a pure
//! function of the viewer and the full task collection with no other
//! inputs and no side effects.

use crate::Role;
use crate::department::Department;
use crate::task::Task;
use crate::user::User;

/// Whether `viewer` is allowed to see `task`.
///
/// - Super admins see every task.
/// - Managers see tasks in their own department; a manager without a
///   department reference sees nothing.
/// - Employees see only their own assignments.
#[must_use]
pub fn can_see(viewer: &User, task: &Task) -> bool {
    match viewer.role {
        Role::SuperAdmin => true,
        Role::AdminManager => viewer
            .department_id
            .as_ref()
            .is_some_and(|dept| *dept == task.department_id),
        Role::Employee => viewer.id == task.assigned_to,
    }
}

/// Narrows the full task collection to what `viewer` may see.
///
/// Applied before any search, sort, or pagination. The result is always a
/// subset of `tasks` in the original order; for a super admin it is the
/// whole collection.
#[must_use]
pub fn visible_tasks<'a>(viewer: &User, tasks: &'a [Task]) -> Vec<&'a Task> {
    tasks.iter().filter(|task| can_see(viewer, task)).collect()
}

/// Returns the users belonging to a department.
#[must_use]
pub fn department_members<'a>(department: &Department, users: &'a [User]) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| user.department_id.as_ref() == Some(&department.id))
        .collect()
}
