//! Resolves the scheduling parameters that apply to one site.

use crate::config::PlannerDefaults;
use crate::models::{Group, Site};

/// Lead time and battery lifecycle in effect for a specific site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectivePolicy {
    pub lead_time_weeks: u32,
    pub battery_life_months: u32,
}

/// Per-site policy resolution over the group list, with system fallbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimePolicy {
    defaults: PlannerDefaults,
}

impl TimePolicy {
    pub fn new(defaults: PlannerDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> PlannerDefaults {
        self.defaults
    }

    /// Looks up the site's group and takes each knob from it when it is a
    /// positive integer. A missing group, dangling reference, or zeroed
    /// field falls back to the defaults. Never fails.
    pub fn resolve(&self, site: &Site, groups: &[Group]) -> EffectivePolicy {
        let group = match site.group_id.as_deref() {
            Some(group_id) => {
                let found = groups.iter().find(|g| g.id == group_id);
                if found.is_none() {
                    log::warn!(
                        "site {} references unknown group {group_id}, using defaults",
                        site.id
                    );
                }
                found
            }
            None => None,
        };

        EffectivePolicy {
            lead_time_weeks: group
                .and_then(|g| g.notification_lead_time_weeks)
                .filter(|weeks| *weeks > 0)
                .unwrap_or(self.defaults.notification_lead_time_weeks),
            battery_life_months: group
                .and_then(|g| g.default_battery_life_months)
                .filter(|months| *months > 0)
                .unwrap_or(self.defaults.default_battery_life_months),
        }
    }
}
