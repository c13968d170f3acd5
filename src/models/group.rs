use serde::{Deserialize, Serialize};

/// Customer tier a site can be assigned to.
///
/// Carries the per-group maintenance knobs; absent or zero values fall back
/// to the system defaults in [`crate::config::PlannerDefaults`]. Groups
/// outlive their sites; deleting a site never touches its group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Months a freshly installed battery is expected to last.
    #[serde(default)]
    pub default_battery_life_months: Option<u32>,
    /// Weeks before a due date during which items are flagged as upcoming.
    #[serde(default)]
    pub notification_lead_time_weeks: Option<u32>,
}
