//! Recurrence arithmetic for scheduled compliance events.
//!
//! Everything here is pure: occurrence sequences are derived from the
//! stored anchor date on every call, so the calendar can re-expand them on
//! each render without any state being advanced.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The wire carried an interval value outside the closed enum. The
/// expander fails fast on these rather than guessing a period.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown recurrence interval '{0}'")]
pub struct UnknownIntervalError(pub String);

/// Repeat period of a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurrenceInterval {
    Once,
    Monthly,
    Quarterly,
    SemiAnnually,
    Annually,
    BiAnnually,
    Quadrennially,
}

impl RecurrenceInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceInterval::Once => "ONCE",
            RecurrenceInterval::Monthly => "MONTHLY",
            RecurrenceInterval::Quarterly => "QUARTERLY",
            RecurrenceInterval::SemiAnnually => "SEMI_ANNUALLY",
            RecurrenceInterval::Annually => "ANNUALLY",
            RecurrenceInterval::BiAnnually => "BI_ANNUALLY",
            RecurrenceInterval::Quadrennially => "QUADRENNIALLY",
        }
    }

    /// False only for `Once`; every other interval repeats indefinitely.
    pub fn is_recurring(&self) -> bool {
        !matches!(self, RecurrenceInterval::Once)
    }

    /// Months in one recurrence period; `None` for `Once`.
    pub fn period_months(&self) -> Option<u32> {
        match self {
            RecurrenceInterval::Once => None,
            RecurrenceInterval::Monthly => Some(1),
            RecurrenceInterval::Quarterly => Some(3),
            RecurrenceInterval::SemiAnnually => Some(6),
            RecurrenceInterval::Annually => Some(12),
            RecurrenceInterval::BiAnnually => Some(24),
            RecurrenceInterval::Quadrennially => Some(48),
        }
    }

    /// One period forward via calendar-month addition. End-of-month dates
    /// clamp (Jan 31 + 1 month is Feb 28/29). `None` for `Once` or on
    /// calendar overflow.
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        let months = self.period_months()?;
        date.checked_add_months(Months::new(months))
    }

    /// Occurrence dates intersecting the inclusive range `[start, end]`,
    /// advancing from `anchor`. For `Once` the sequence holds the anchor
    /// iff it falls inside the range. The iterator is lazy, finite, and
    /// restartable: constructing it twice yields identical sequences.
    pub fn occurrences_in_range(
        &self,
        anchor: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Occurrences {
        Occurrences {
            interval: *self,
            cursor: Some(anchor),
            start,
            end,
        }
    }
}

impl FromStr for RecurrenceInterval {
    type Err = UnknownIntervalError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "ONCE" => Ok(RecurrenceInterval::Once),
            "MONTHLY" => Ok(RecurrenceInterval::Monthly),
            "QUARTERLY" => Ok(RecurrenceInterval::Quarterly),
            "SEMI_ANNUALLY" => Ok(RecurrenceInterval::SemiAnnually),
            "ANNUALLY" => Ok(RecurrenceInterval::Annually),
            "BI_ANNUALLY" => Ok(RecurrenceInterval::BiAnnually),
            "QUADRENNIALLY" => Ok(RecurrenceInterval::Quadrennially),
            other => Err(UnknownIntervalError(other.to_string())),
        }
    }
}

/// Lazy sequence of occurrence dates inside one visible range.
#[derive(Debug, Clone)]
pub struct Occurrences {
    interval: RecurrenceInterval,
    cursor: Option<NaiveDate>,
    start: NaiveDate,
    end: NaiveDate,
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        loop {
            let date = self.cursor?;
            if date > self.end {
                self.cursor = None;
                return None;
            }
            self.cursor = self.interval.advance(date);
            if date >= self.start {
                return Some(date);
            }
        }
    }
}
