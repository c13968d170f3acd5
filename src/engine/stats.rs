//! Dashboard roll-up: plain counting over the raw records, no
//! classification involved.

use chrono::NaiveDate;
use serde::Serialize;

use crate::engine::issues::parse_wire_date;
use crate::models::{BatteryStatus, Site, TaskStatus};

/// Battery counts by literal status field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub healthy: usize,
    pub warning: usize,
    pub critical: usize,
    pub replaced: usize,
}

/// Batteries installed at one site, for the per-site breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteBatteryCount {
    pub site_id: String,
    pub site_name: String,
    pub batteries: usize,
}

/// Landing-dashboard summary for the whole fleet.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total_sites: usize,
    pub total_batteries: usize,
    pub battery_status: StatusCounts,
    /// Open or in-progress tasks whose deadline has passed. Tasks with a
    /// malformed deadline are not counted here; the task feed flags them.
    pub overdue_tasks: usize,
    pub batteries_by_site: Vec<SiteBatteryCount>,
}

/// Counts batteries by status, sites, and overdue open tasks across the
/// snapshot.
pub fn summarize(sites: &[Site], today: NaiveDate) -> FleetSummary {
    let mut summary = FleetSummary {
        total_sites: sites.len(),
        ..FleetSummary::default()
    };
    for site in sites {
        let mut site_batteries = 0;
        for battery in site.batteries() {
            site_batteries += 1;
            match battery.status {
                BatteryStatus::Healthy => summary.battery_status.healthy += 1,
                BatteryStatus::Warning => summary.battery_status.warning += 1,
                BatteryStatus::Critical => summary.battery_status.critical += 1,
                BatteryStatus::Replaced => summary.battery_status.replaced += 1,
            }
        }
        summary.total_batteries += site_batteries;
        summary.batteries_by_site.push(SiteBatteryCount {
            site_id: site.id.clone(),
            site_name: site.name.clone(),
            batteries: site_batteries,
        });

        for task in &site.tasks {
            if task.status == TaskStatus::Done {
                continue;
            }
            if let Some(deadline) = parse_wire_date(task.deadline.trim()) {
                if deadline < today {
                    summary.overdue_tasks += 1;
                }
            }
        }
    }
    summary
}
