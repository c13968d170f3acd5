use maintbase::engine::{normalize, task_feed, TaskFilter};
use maintbase::ids::{IdSource, UuidIds};
use maintbase::models::{ManualTask, PendingIssue, TaskPriority, TaskStatus};

use super::support::{date, site};

#[test]
fn generated_ids_are_unique_and_non_empty() {
    let ids = UuidIds;
    let first = ids.next_id();
    let second = ids.next_id();
    assert!(!first.is_empty());
    assert_ne!(first, second);
}

#[test]
fn created_task_flows_through_the_task_feed() {
    let ids = UuidIds;
    let today = date(2026, 8, 6);
    let task = ManualTask::create(
        &ids,
        "Replace fuse in rack 3",
        date(2026, 9, 1),
        TaskPriority::High,
        "jkw",
        today,
    );
    assert_eq!(task.status, TaskStatus::Open);

    let mut s = site("s1");
    s.tasks = vec![task];
    let feed = task_feed(&[s], TaskFilter::NextMonth, today);
    assert_eq!(feed.tasks.len(), 1);
    assert_eq!(feed.tasks[0].deadline, date(2026, 9, 1));
}

#[test]
fn reported_issue_normalizes_as_forced_actionable() {
    let ids = UuidIds;
    let today = date(2026, 8, 6);
    let issue = PendingIssue::report(&ids, "Loose cabling in rack", "jkw", today);

    let mut s = site("s1");
    s.pending_issues = vec![issue];
    let normalized = normalize(&[s]);
    assert_eq!(normalized.items.len(), 1);
    assert!(normalized.items[0].forced_actionable);
    assert_eq!(normalized.items[0].due_date, today);
}
