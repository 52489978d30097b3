//! Property-based tests for the visibility filter and the workflow.
//!
//! Uses proptest to verify:
//! 1. The visibility filter always returns a subset, preserves order,
//!    and is exactly the identity for super admins.
//! 2. `can_see` partitions the task collection: a task is either in the
//!    filtered view or invisible, never both.
//! 3. The workflow transition table is closed: arbitrary status pairs
//!    outside the four edges always fail, and a failed transition never
//!    modifies the task.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use corpsync_core::id::{DeptId, TaskId, UserId};
use corpsync_core::task::{Task, TaskPriority, TaskStatus};
use corpsync_core::{Role, User, can_see, visible_tasks, workflow};

// --- strategies ---

/// Strategy for generating arbitrary roles.
fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::SuperAdmin),
        Just(Role::AdminManager),
        Just(Role::Employee),
    ]
}

/// Strategy for generating arbitrary task statuses.
fn arb_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Todo),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Review),
        Just(TaskStatus::Done),
    ]
}

/// Strategy for generating arbitrary priorities.
fn arb_priority() -> impl Strategy<Value = TaskPriority> {
    prop_oneof![
        Just(TaskPriority::Low),
        Just(TaskPriority::Medium),
        Just(TaskPriority::High),
        Just(TaskPriority::Critical),
    ]
}

/// Small pools of user and department ids so collisions between viewer
/// and task references actually happen.
fn arb_user_id() -> impl Strategy<Value = UserId> {
    (1u8..=8).prop_map(|n| UserId::new(n.to_string()))
}

fn arb_dept_id() -> impl Strategy<Value = DeptId> {
    (1u8..=4).prop_map(|n| DeptId::new(format!("dept-{n}")))
}

/// Strategy for generating an arbitrary task.
fn arb_task(index: usize) -> impl Strategy<Value = Task> {
    (arb_status(), arb_priority(), arb_user_id(), arb_dept_id()).prop_map(
        move |(status, priority, assignee, dept)| Task {
            id: TaskId::new(format!("t{index}")),
            title: format!("task {index}"),
            description: String::new(),
            status,
            priority,
            assigned_to: assignee,
            created_by: UserId::from("1"),
            department_id: dept,
            deadline: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap(),
            comments: Vec::new(),
            rejection_reason: None,
        },
    )
}

/// Strategy for generating a task collection with distinct ids.
fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(
        (arb_status(), arb_priority(), arb_user_id(), arb_dept_id()),
        0..12,
    )
    .prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, (status, priority, assignee, dept))| Task {
                id: TaskId::new(format!("t{i}")),
                title: format!("task {i}"),
                description: String::new(),
                status,
                priority,
                assigned_to: assignee,
                created_by: UserId::from("1"),
                department_id: dept,
                deadline: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                created_at: Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap(),
                comments: Vec::new(),
                rejection_reason: None,
            })
            .collect()
    })
}

/// Strategy for generating an arbitrary viewer.
fn arb_viewer() -> impl Strategy<Value = User> {
    (arb_role(), arb_user_id(), prop::option::of(arb_dept_id())).prop_map(
        |(role, id, dept)| User {
            id,
            name: "viewer".to_string(),
            email: "viewer@corporate.com".to_string(),
            role,
            department_id: if role == Role::SuperAdmin { None } else { dept },
            avatar: None,
            github: None,
        },
    )
}

// --- visibility properties ---

proptest! {
    #[test]
    fn visible_tasks_is_an_order_preserving_subset(viewer in arb_viewer(), tasks in arb_tasks()) {
        let visible = visible_tasks(&viewer, &tasks);
        prop_assert!(visible.len() <= tasks.len());

        // Order preservation: the filtered ids appear in store order.
        let mut cursor = tasks.iter();
        for seen in &visible {
            prop_assert!(cursor.any(|t| t.id == seen.id));
        }
    }

    #[test]
    fn super_admin_view_is_the_identity(tasks in arb_tasks()) {
        let admin = User {
            id: UserId::from("1"),
            name: "root".to_string(),
            email: "root@corporate.com".to_string(),
            role: Role::SuperAdmin,
            department_id: None,
            avatar: None,
            github: None,
        };
        let visible = visible_tasks(&admin, &tasks);
        prop_assert_eq!(visible.len(), tasks.len());
    }

    #[test]
    fn can_see_partitions_the_collection(viewer in arb_viewer(), tasks in arb_tasks()) {
        let visible = visible_tasks(&viewer, &tasks);
        for task in &tasks {
            let in_view = visible.iter().any(|t| t.id == task.id);
            prop_assert_eq!(in_view, can_see(&viewer, task));
        }
    }

    #[test]
    fn employees_see_only_their_own_assignments(viewer in arb_viewer(), tasks in arb_tasks()) {
        prop_assume!(viewer.role == Role::Employee);
        for task in visible_tasks(&viewer, &tasks) {
            prop_assert_eq!(&task.assigned_to, &viewer.id);
        }
    }

    #[test]
    fn managers_without_a_department_see_nothing(tasks in arb_tasks(), id in arb_user_id()) {
        let manager = User {
            id,
            name: "m".to_string(),
            email: "m@corporate.com".to_string(),
            role: Role::AdminManager,
            department_id: None,
            avatar: None,
            github: None,
        };
        prop_assert!(visible_tasks(&manager, &tasks).is_empty());
    }
}

// --- workflow properties ---

/// The four edges of the workflow, with whether the assignee or a
/// reviewer drives them.
const EDGES: [(TaskStatus, TaskStatus); 4] = [
    (TaskStatus::Todo, TaskStatus::InProgress),
    (TaskStatus::InProgress, TaskStatus::Review),
    (TaskStatus::Review, TaskStatus::Done),
    (TaskStatus::Review, TaskStatus::InProgress),
];

fn actor(role: Role, id: &str) -> User {
    User {
        id: UserId::from(id),
        name: id.to_string(),
        email: format!("{id}@corporate.com"),
        role,
        department_id: (role != Role::SuperAdmin).then(|| DeptId::from("dept-1")),
        avatar: None,
        github: None,
    }
}

proptest! {
    #[test]
    fn transition_table_is_closed(from in arb_status(), to in arb_status(), task in arb_task(0)) {
        let mut task = task;
        task.status = from;
        let before = task.clone();

        // Try the transition as the assignee and as a reviewer; a legal
        // edge must work for one of them, an illegal edge for neither.
        let assignee = actor(Role::Employee, task.assigned_to.as_str());
        let reviewer = actor(Role::AdminManager, "reviewer");

        let mut as_assignee = before.clone();
        let ok_assignee =
            workflow::apply_transition(&mut as_assignee, &assignee, to, Some("reason")).is_ok();
        let mut as_reviewer = before.clone();
        let ok_reviewer =
            workflow::apply_transition(&mut as_reviewer, &reviewer, to, Some("reason")).is_ok();

        prop_assert_eq!(ok_assignee || ok_reviewer, EDGES.contains(&(from, to)));
    }

    #[test]
    fn failed_transitions_leave_the_task_untouched(
        from in arb_status(),
        to in arb_status(),
        role in arb_role(),
        task in arb_task(0),
    ) {
        let mut task = task;
        task.status = from;
        let before = task.clone();

        // No reason supplied, so rejections fail too; any error must
        // leave every field as it was.
        if workflow::apply_transition(&mut task, &actor(role, "someone"), to, None).is_err() {
            prop_assert_eq!(task, before);
        }
    }
}
