//! Per-record data problems surfaced alongside computed views.
//!
//! A malformed record is skipped and flagged, never silently coerced to a
//! default date, since treating an unparsable due date as "not due" would hide
//! real maintenance risk. The rest of the snapshot keeps computing.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use thiserror::Error;

/// Why a record could not participate in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordIssueReason {
    MissingDate,
    UnparsableDate,
    UnknownInterval,
}

impl RecordIssueReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordIssueReason::MissingDate => "missing date",
            RecordIssueReason::UnparsableDate => "unparsable date",
            RecordIssueReason::UnknownInterval => "unknown interval",
        }
    }
}

/// One malformed record, identified well enough for the caller to surface
/// it next to the view (and for an operator to find and fix it).
#[derive(Debug, Clone, Error, Serialize)]
#[error("{field} on record {record_id} (site {site_id}): {} ({message})", .reason.as_str())]
#[serde(rename_all = "camelCase")]
pub struct RecordIssue {
    pub site_id: String,
    pub record_id: String,
    pub field: &'static str,
    pub reason: RecordIssueReason,
    pub message: String,
}

impl RecordIssue {
    pub fn new(
        site_id: impl Into<String>,
        record_id: impl Into<String>,
        field: &'static str,
        reason: RecordIssueReason,
        message: impl Into<String>,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            record_id: record_id.into(),
            field,
            reason,
            message: message.into(),
        }
    }
}

/// Parses a wire date: either a full RFC 3339 timestamp (the upstream app
/// writes `createdAt` that way) or a plain `YYYY-MM-DD` form value.
pub(crate) fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parses a required date field, mapping empty or malformed values to a
/// [`RecordIssue`] for the caller to flag.
pub(crate) fn require_date(
    raw: &str,
    site_id: &str,
    record_id: &str,
    field: &'static str,
) -> Result<NaiveDate, RecordIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RecordIssue::new(
            site_id,
            record_id,
            field,
            RecordIssueReason::MissingDate,
            "field is empty",
        ));
    }
    parse_wire_date(trimmed).ok_or_else(|| {
        RecordIssue::new(
            site_id,
            record_id,
            field,
            RecordIssueReason::UnparsableDate,
            format!("'{trimmed}' is not an ISO date"),
        )
    })
}
