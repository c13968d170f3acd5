use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::recurrence::RecurrenceInterval;

/// Source collection a maintenance item was synthesized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Battery,
    Scheduled,
    Issue,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Battery => "battery",
            ItemKind::Scheduled => "scheduled",
            ItemKind::Issue => "issue",
        }
    }
}

/// Canonical engine-internal representation of one actionable thing.
///
/// Synthesized by the normalizer on every invocation, never persisted.
/// `id` is `<kind>-<source id>`, unique across the three source
/// collections, and is what keeps the priority and month feeds disjoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceItem {
    pub id: String,
    pub kind: ItemKind,
    pub site_id: String,
    pub site_name: String,
    /// Technology name, event title, or a fixed issue label.
    pub label: String,
    /// Short info line: battery capacity/voltage, event interval, issue author.
    pub detail: String,
    pub due_date: NaiveDate,
    /// Parsed repeat period for scheduled events; the calendar uses it to
    /// expand occurrences past the stored next date. `None` for batteries
    /// and issues.
    #[serde(default)]
    pub recurrence: Option<RecurrenceInterval>,
    /// Must surface in the overdue bucket irrespective of its date
    /// (non-healthy battery, open issue).
    pub forced_actionable: bool,
    /// Whether `due_date` is meaningful to the day or only to the month.
    pub day_precision: bool,
    pub note: String,
}
