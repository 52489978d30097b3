//! The demo seed fixture.
//!
//! The same six users, three departments, and four tasks the original
//! dashboard ships with. Tests and the demo server build their workspace
//! from this so ids like `t1` and `dept-1` stay stable.

use chrono::{NaiveDate, TimeZone, Utc};

use corpsync_core::id::{DeptId, TaskId, UserId};
use corpsync_core::task::{Task, TaskPriority, TaskStatus};
use corpsync_core::{Department, Role, User};

use crate::capabilities::{Clock, IdGen, SystemClock, UuidIds};
use crate::workspace::Workspace;

/// Builds the demo workspace with UUID ids and the system clock for
/// anything created after the seed.
#[must_use]
pub fn demo_workspace() -> Workspace {
    demo_workspace_with(Box::new(UuidIds), Box::new(SystemClock))
}

/// Builds the demo workspace with explicit capabilities.
#[must_use]
pub fn demo_workspace_with(ids: Box<dyn IdGen>, clock: Box<dyn Clock>) -> Workspace {
    Workspace::from_records(seed_users(), seed_departments(), seed_tasks(), ids, clock)
}

fn avatar(seed: &str) -> Option<String> {
    Some(format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}"))
}

fn midnight(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
    // Seed dates are date-only in the original; midnight UTC is the
    // canonical expansion.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The six seed users.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: UserId::from("1"),
            name: "Super Admin".to_string(),
            email: "super@corporate.com".to_string(),
            role: Role::SuperAdmin,
            department_id: None,
            avatar: avatar("Lucky"),
            github: None,
        },
        User {
            id: UserId::from("2"),
            name: "Sarah Manager".to_string(),
            email: "sarah@corporate.com".to_string(),
            role: Role::AdminManager,
            department_id: Some(DeptId::from("dept-1")),
            avatar: avatar("Sarah"),
            github: Some("sarah-codes".to_string()),
        },
        User {
            id: UserId::from("3"),
            name: "John Doe".to_string(),
            email: "john@corporate.com".to_string(),
            role: Role::Employee,
            department_id: Some(DeptId::from("dept-1")),
            avatar: avatar("John"),
            github: Some("johndoe-dev".to_string()),
        },
        User {
            id: UserId::from("4"),
            name: "Michael Scott".to_string(),
            email: "michael@corporate.com".to_string(),
            role: Role::AdminManager,
            department_id: Some(DeptId::from("dept-2")),
            avatar: avatar("Michael"),
            github: None,
        },
        User {
            id: UserId::from("5"),
            name: "Pam Beesly".to_string(),
            email: "pam@corporate.com".to_string(),
            role: Role::Employee,
            department_id: Some(DeptId::from("dept-2")),
            avatar: avatar("Pam"),
            github: None,
        },
        User {
            id: UserId::from("6"),
            name: "Kelly Design".to_string(),
            email: "kelly@corporate.com".to_string(),
            role: Role::AdminManager,
            department_id: Some(DeptId::from("dept-3")),
            avatar: avatar("Kelly"),
            github: None,
        },
    ]
}

/// The three seed departments.
#[must_use]
pub fn seed_departments() -> Vec<Department> {
    vec![
        Department {
            id: DeptId::from("dept-1"),
            name: "Engineering".to_string(),
            description: "Software development and infrastructure.".to_string(),
            manager_id: Some(UserId::from("2")),
            created_at: midnight(2026, 1, 1),
        },
        Department {
            id: DeptId::from("dept-2"),
            name: "Product".to_string(),
            description: "Product strategy and roadmap.".to_string(),
            manager_id: Some(UserId::from("4")),
            created_at: midnight(2026, 1, 5),
        },
        Department {
            id: DeptId::from("dept-3"),
            name: "Design".to_string(),
            description: "User experience and visual identity.".to_string(),
            manager_id: Some(UserId::from("6")),
            created_at: midnight(2026, 1, 10),
        },
    ]
}

/// The four seed tasks.
#[must_use]
pub fn seed_tasks() -> Vec<Task> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        Task {
            id: TaskId::from("t1"),
            title: "Implement Auth Flow".to_string(),
            description: "Set up JWT authentication for the frontend.".to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            assigned_to: UserId::from("3"),
            created_by: UserId::from("1"),
            department_id: DeptId::from("dept-1"),
            deadline: date(2026, 2, 15),
            created_at: midnight(2026, 1, 20),
            comments: Vec::new(),
            rejection_reason: None,
        },
        Task {
            id: TaskId::from("t2"),
            title: "Bug: Sidebar Alignment".to_string(),
            description: "Fix the layout issue in the sidebar navigation.".to_string(),
            status: TaskStatus::Review,
            priority: TaskPriority::Medium,
            assigned_to: UserId::from("3"),
            created_by: UserId::from("2"),
            department_id: DeptId::from("dept-1"),
            deadline: date(2026, 2, 10),
            created_at: midnight(2026, 1, 22),
            comments: Vec::new(),
            rejection_reason: None,
        },
        Task {
            id: TaskId::from("t3"),
            title: "Database Migration".to_string(),
            description: "Migrate legacy data to the new schema.".to_string(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Critical,
            assigned_to: UserId::from("3"),
            created_by: UserId::from("1"),
            department_id: DeptId::from("dept-1"),
            deadline: date(2026, 2, 1),
            created_at: midnight(2026, 1, 25),
            comments: Vec::new(),
            rejection_reason: None,
        },
        Task {
            id: TaskId::from("t4"),
            title: "Product Roadmap Q3".to_string(),
            description: "Define the key milestones for the next quarter.".to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            assigned_to: UserId::from("5"),
            created_by: UserId::from("4"),
            department_id: DeptId::from("dept-2"),
            deadline: date(2026, 3, 1),
            created_at: midnight(2026, 1, 28),
            comments: Vec::new(),
            rejection_reason: None,
        },
    ]
}
