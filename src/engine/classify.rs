//! Temporal classification of normalized items.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::MaintenanceItem;

/// Temporal bucket of one item relative to "today".
///
/// Resolved records (replaced batteries, resolved issues, done tasks) are
/// dropped by the normalizer and task views before classification, so no
/// variant exists for them here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Overdue,
    Upcoming,
    Scheduled,
}

impl ItemState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemState::Overdue => "overdue",
            ItemState::Upcoming => "upcoming",
            ItemState::Scheduled => "scheduled",
        }
    }

    /// Overdue and upcoming items are what the priority feed shows.
    pub fn needs_attention(&self) -> bool {
        matches!(self, ItemState::Overdue | ItemState::Upcoming)
    }
}

/// Pure classification against an explicit calendar day.
///
/// A due date in the past is overdue no matter what; forced-actionable
/// items (non-healthy batteries, open issues) are overdue no matter their
/// date. Otherwise the item is upcoming once today enters the lead-time
/// window before the due date, and scheduled while still outside it.
pub fn classify(item: &MaintenanceItem, today: NaiveDate, lead_time_weeks: u32) -> ItemState {
    if item.due_date < today || item.forced_actionable {
        return ItemState::Overdue;
    }
    let window_opens = item.due_date - Duration::weeks(i64::from(lead_time_weeks));
    if today >= window_opens {
        ItemState::Upcoming
    } else {
        ItemState::Scheduled
    }
}
