//! System-wide fallbacks for the maintenance planner.
//!
//! Groups may override both knobs per customer tier; sites without a group
//! (or with a dangling/zeroed group) resolve to these values. Callers that
//! persist settings can round-trip this struct; the engine itself only ever
//! receives it as an explicit parameter.

use serde::{Deserialize, Serialize};

/// Fallback scheduling parameters applied when no group override exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlannerDefaults {
    /// Weeks before a due date during which items are flagged as upcoming.
    #[serde(default = "default_lead_time_weeks")]
    pub notification_lead_time_weeks: u32,
    /// Months a freshly installed battery is expected to last.
    #[serde(default = "default_battery_life_months")]
    pub default_battery_life_months: u32,
}

impl Default for PlannerDefaults {
    fn default() -> Self {
        Self {
            notification_lead_time_weeks: default_lead_time_weeks(),
            default_battery_life_months: default_battery_life_months(),
        }
    }
}

const fn default_lead_time_weeks() -> u32 {
    4
}

const fn default_battery_life_months() -> u32 {
    24
}
