//! Flattens the heterogeneous per-site collections into the canonical
//! maintenance-item shape.

use crate::engine::issues::{require_date, RecordIssue, RecordIssueReason};
use crate::engine::recurrence::RecurrenceInterval;
use crate::models::{BatteryStatus, IssueStatus, ItemKind, MaintenanceItem, Site};

/// Normalization result: the items that parsed cleanly plus one issue per
/// record that did not.
#[derive(Debug, Clone, Default)]
pub struct NormalizedItems {
    pub items: Vec<MaintenanceItem>,
    pub issues: Vec<RecordIssue>,
}

/// Emits, per site: one item per battery (replaced ones excluded), one per
/// active scheduled event, one per open pending issue. That order is what
/// downstream sorting relies on as the tie-break. Missing optional text
/// fields default to empty strings; a missing or unparsable required date
/// skips the record and flags it.
pub fn normalize(sites: &[Site]) -> NormalizedItems {
    let mut out = NormalizedItems::default();
    for site in sites {
        normalize_site(site, &mut out);
    }
    out
}

fn normalize_site(site: &Site, out: &mut NormalizedItems) {
    for tech in &site.technologies {
        for battery in &tech.batteries {
            if battery.status == BatteryStatus::Replaced {
                continue;
            }
            let due = match require_date(
                &battery.next_replacement_date,
                &site.id,
                &battery.id,
                "nextReplacementDate",
            ) {
                Ok(date) => date,
                Err(issue) => {
                    out.issues.push(issue);
                    continue;
                }
            };
            out.items.push(MaintenanceItem {
                id: format!("battery-{}", battery.id),
                kind: ItemKind::Battery,
                site_id: site.id.clone(),
                site_name: site.name.clone(),
                label: tech.name.clone(),
                detail: format!("{}Ah / {}V", battery.capacity_ah, battery.voltage_v),
                due_date: due,
                recurrence: None,
                forced_actionable: battery.status != BatteryStatus::Healthy,
                day_precision: true,
                note: battery.notes.clone().unwrap_or_default(),
            });
        }
    }

    for event in &site.scheduled_events {
        if !event.is_active {
            continue;
        }
        let due = match require_date(&event.next_date, &site.id, &event.id, "nextDate") {
            Ok(date) => date,
            Err(issue) => {
                out.issues.push(issue);
                continue;
            }
        };
        let interval = match event.interval.parse::<RecurrenceInterval>() {
            Ok(interval) => interval,
            Err(err) => {
                out.issues.push(RecordIssue::new(
                    &site.id,
                    &event.id,
                    "interval",
                    RecordIssueReason::UnknownInterval,
                    err.to_string(),
                ));
                continue;
            }
        };
        out.items.push(MaintenanceItem {
            id: format!("scheduled-{}", event.id),
            kind: ItemKind::Scheduled,
            site_id: site.id.clone(),
            site_name: site.name.clone(),
            label: event.title.clone(),
            detail: event.interval.clone(),
            due_date: due,
            recurrence: Some(interval),
            forced_actionable: false,
            day_precision: event.precision_on_day,
            note: event.description.clone().unwrap_or_default(),
        });
    }

    for issue in &site.pending_issues {
        if issue.status != IssueStatus::Open {
            continue;
        }
        // An open issue has no deadline of its own; the creation date is
        // what the views display.
        let due = match require_date(&issue.created_at, &site.id, &issue.id, "createdAt") {
            Ok(date) => date,
            Err(record_issue) => {
                out.issues.push(record_issue);
                continue;
            }
        };
        out.items.push(MaintenanceItem {
            id: format!("issue-{}", issue.id),
            kind: ItemKind::Issue,
            site_id: site.id.clone(),
            site_name: site.name.clone(),
            label: "Deferred issue".to_string(),
            detail: format!("Reported by {}", issue.created_by),
            due_date: due,
            recurrence: None,
            forced_actionable: true,
            day_precision: true,
            note: issue.text.clone(),
        });
    }
}
