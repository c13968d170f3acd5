use serde::{Deserialize, Serialize};

/// A recurring compliance event attached to a site (annual inspection,
/// quarterly check, ...).
///
/// `interval` stays a raw wire string here; the engine parses it into
/// [`crate::engine::recurrence::RecurrenceInterval`] and flags unknown
/// values per record. `next_date` is the single stored upcoming occurrence;
/// later occurrences are derived, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub id: String,
    pub title: String,
    pub start_date: String,
    pub next_date: String,
    pub interval: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub future_notes: Option<String>,
    pub is_active: bool,
    /// Whether the date is meaningful to the day or only to the month.
    /// Display metadata; classification always uses the full date.
    #[serde(default = "default_precision_on_day")]
    pub precision_on_day: bool,
}

const fn default_precision_on_day() -> bool {
    true
}
