//! Integration tests over the seeded demo workspace.
//!
//! Exercises role-scoped visibility, the review workflow, and the
//! comment thread against the same fixture the original dashboard
//! ships with.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use corpsync_core::id::{TaskId, UserId};
use corpsync_core::task::TaskStatus;
use corpsync_engine::seed::demo_workspace_with;
use corpsync_engine::{FixedClock, SequenceIds, Workspace, WorkspaceError};

fn workspace() -> Workspace {
    demo_workspace_with(
        Box::new(SequenceIds::new("gen")),
        Box::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap(),
        )),
    )
}

fn task_ids(tasks: &[&corpsync_core::Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.to_string()).collect()
}

// --- visibility over the seed fixture ---

#[test]
fn employee_john_sees_exactly_his_three_tasks() {
    let ws = workspace();
    let visible = ws.visible_tasks(&UserId::from("3")).unwrap();
    assert_eq!(task_ids(&visible), vec!["t1", "t2", "t3"]);
}

#[test]
fn manager_sarah_sees_exactly_her_department() {
    let ws = workspace();
    let visible = ws.visible_tasks(&UserId::from("2")).unwrap();
    assert_eq!(task_ids(&visible), vec!["t1", "t2", "t3"]);
}

#[test]
fn super_admin_sees_all_four_tasks() {
    let ws = workspace();
    let visible = ws.visible_tasks(&UserId::from("1")).unwrap();
    assert_eq!(task_ids(&visible), vec!["t1", "t2", "t3", "t4"]);
}

#[test]
fn employee_pam_sees_only_the_product_task() {
    let ws = workspace();
    let visible = ws.visible_tasks(&UserId::from("5")).unwrap();
    assert_eq!(task_ids(&visible), vec!["t4"]);
}

#[test]
fn unknown_viewer_is_an_error() {
    let ws = workspace();
    let err = ws.visible_tasks(&UserId::from("999")).unwrap_err();
    assert_eq!(err, WorkspaceError::UserNotFound(UserId::from("999")));
}

// --- review workflow over the seed fixture ---

#[test]
fn rejecting_t2_stores_the_reason_and_forces_another_review_pass() {
    let mut ws = workspace();
    let t2 = TaskId::from("t2");
    let sarah = UserId::from("2");
    let john = UserId::from("3");

    // t2 is in REVIEW; Sarah sends it back with a reason.
    let task = ws
        .transition_task(&t2, &sarah, TaskStatus::InProgress, Some("needs fix"))
        .unwrap();
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.rejection_reason.as_deref(), Some("needs fix"));

    // Approving now is invalid until it passes through REVIEW again.
    let err = ws
        .transition_task(&t2, &sarah, TaskStatus::Done, None)
        .unwrap_err();
    assert!(matches!(err, WorkspaceError::Workflow(_)));

    // John resubmits (clearing the stale reason), Sarah approves.
    let task = ws
        .transition_task(&t2, &john, TaskStatus::Review, None)
        .unwrap();
    assert_eq!(task.rejection_reason, None);
    let task = ws.transition_task(&t2, &sarah, TaskStatus::Done, None).unwrap();
    assert_eq!(task.status, TaskStatus::Done);
}

#[test]
fn rejection_without_a_reason_changes_nothing() {
    let mut ws = workspace();
    let t2 = TaskId::from("t2");
    let err = ws
        .transition_task(&t2, &UserId::from("2"), TaskStatus::InProgress, None)
        .unwrap_err();
    assert!(matches!(err, WorkspaceError::Workflow(_)));
    assert_eq!(ws.task(&t2).unwrap().status, TaskStatus::Review);
}

#[test]
fn todo_to_done_is_rejected_for_everyone() {
    let mut ws = workspace();
    let t3 = TaskId::from("t3");
    for actor in ["1", "2", "3"] {
        let err = ws
            .transition_task(&t3, &UserId::from(actor), TaskStatus::Done, None)
            .unwrap_err();
        assert!(matches!(err, WorkspaceError::Workflow(_)), "actor {actor}");
        assert_eq!(ws.task(&t3).unwrap().status, TaskStatus::Todo);
    }
}

// --- comment thread ---

#[test]
fn comments_append_in_call_order_and_never_reorder() {
    let mut ws = workspace();
    let t1 = TaskId::from("t1");
    let john = UserId::from("3");

    for i in 1..=5 {
        ws.add_comment(&t1, &john, &format!("update {i}")).unwrap();
    }
    let comments = &ws.task(&t1).unwrap().comments;
    assert_eq!(comments.len(), 5);
    let texts: Vec<&str> = comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["update 1", "update 2", "update 3", "update 4", "update 5"]);

    // A further append keeps all earlier comments in place.
    ws.add_comment(&t1, &UserId::from("2"), "looks good").unwrap();
    let comments = &ws.task(&t1).unwrap().comments;
    assert_eq!(comments.len(), 6);
    assert_eq!(comments[0].text, "update 1");
    assert_eq!(comments[5].author_id, UserId::from("2"));
}

#[test]
fn comment_ids_and_timestamps_come_from_the_injected_capabilities() {
    let mut ws = workspace();
    let comment = ws
        .add_comment(&TaskId::from("t1"), &UserId::from("3"), "hello")
        .unwrap();
    assert_eq!(comment.id.as_str(), "gen-1");
    assert_eq!(
        comment.created_at,
        Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap()
    );
}

// --- directory maintenance ---

#[test]
fn deleting_john_is_blocked_while_his_tasks_are_open() {
    let mut ws = workspace();
    let john = UserId::from("3");
    let err = ws.delete_user(&john).unwrap_err();
    assert_eq!(
        err,
        WorkspaceError::UserHasActiveTasks {
            user: john.clone(),
            open_tasks: 3,
        }
    );
    assert!(ws.user(&john).is_some());
}

#[test]
fn deleting_an_unassigned_manager_clears_their_department() {
    let mut ws = workspace();
    let kelly = UserId::from("6");
    ws.delete_user(&kelly).unwrap();
    assert!(ws.user(&kelly).is_none());
    let design = ws.department(&"dept-3".into()).unwrap();
    assert_eq!(design.manager_id, None);
}

#[test]
fn seed_emails_stay_unique() {
    let mut ws = workspace();
    let err = ws
        .add_user(corpsync_engine::NewUser {
            name: "Imposter".to_string(),
            email: "sarah@corporate.com".to_string(),
            role: corpsync_core::Role::Employee,
            department_id: Some("dept-1".into()),
            avatar: None,
            github: None,
        })
        .unwrap_err();
    assert_eq!(
        err,
        WorkspaceError::DuplicateEmail("sarah@corporate.com".to_string())
    );
}
