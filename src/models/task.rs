use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::IdSource;

/// Priority assigned to an operator-created task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Lifecycle of a manual task. `Done` tasks are excluded from every
/// temporal view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Open,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "OPEN",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }
}

/// Ad-hoc task created by an operator against one site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualTask {
    pub id: String,
    pub description: String,
    pub deadline: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: String,
    pub created_by: String,
}

impl ManualTask {
    /// Builds a new open task with an id from the injected generator.
    pub fn create(
        ids: &dyn IdSource,
        description: impl Into<String>,
        deadline: NaiveDate,
        priority: TaskPriority,
        created_by: impl Into<String>,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: ids.next_id(),
            description: description.into(),
            deadline: deadline.format("%Y-%m-%d").to_string(),
            priority,
            status: TaskStatus::Open,
            note: None,
            created_at: today.format("%Y-%m-%d").to_string(),
            created_by: created_by.into(),
        }
    }
}

/// State of a deferred issue. `Resolved` issues leave every bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueStatus {
    Open,
    Resolved,
}

/// Free-text defect logged during a visit and deferred for later.
///
/// Treated as immediately actionable for as long as it stays open.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingIssue {
    pub id: String,
    pub text: String,
    pub created_at: String,
    pub created_by: String,
    pub status: IssueStatus,
}

impl PendingIssue {
    /// Records a new open issue with an id from the injected generator.
    pub fn report(
        ids: &dyn IdSource,
        text: impl Into<String>,
        created_by: impl Into<String>,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: ids.next_id(),
            text: text.into(),
            created_at: today.format("%Y-%m-%d").to_string(),
            created_by: created_by.into(),
            status: IssueStatus::Open,
        }
    }
}
