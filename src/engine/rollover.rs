//! Write-path conveniences for the external data layer.
//!
//! The engine never mutates records; after an operator completes a swap or
//! an inspection, the data layer applies these computed values and the
//! engine is simply re-invoked with the fresh snapshot.

use anyhow::{Context, Result};
use chrono::{Months, NaiveDate};

use crate::engine::issues::parse_wire_date;
use crate::engine::policy::EffectivePolicy;
use crate::engine::recurrence::RecurrenceInterval;
use crate::models::ScheduledEvent;

/// Dates to write back after a battery is marked replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementReset {
    pub install_date: NaiveDate,
    pub next_replacement_date: NaiveDate,
}

/// Install today, replace again after the effective lifecycle months.
pub fn replacement_reset(policy: &EffectivePolicy, today: NaiveDate) -> Result<ReplacementReset> {
    let next = today
        .checked_add_months(Months::new(policy.battery_life_months))
        .with_context(|| {
            format!(
                "battery life of {} months pushes the date past the calendar range",
                policy.battery_life_months
            )
        })?;
    Ok(ReplacementReset {
        install_date: today,
        next_replacement_date: next,
    })
}

/// The next occurrence to store after an event is acknowledged as done, or
/// `None` for a one-off event, which the caller should deactivate instead.
pub fn acknowledge_event(event: &ScheduledEvent) -> Result<Option<NaiveDate>> {
    let interval: RecurrenceInterval = event
        .interval
        .parse()
        .with_context(|| format!("event {} carries an invalid interval", event.id))?;
    let current = parse_wire_date(event.next_date.trim()).with_context(|| {
        format!(
            "event {} has an unparsable nextDate '{}'",
            event.id, event.next_date
        )
    })?;
    Ok(interval.advance(current))
}
