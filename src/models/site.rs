use serde::{Deserialize, Serialize};

use super::event::ScheduledEvent;
use super::task::{ManualTask, PendingIssue};

/// Health state reported for a standby battery.
///
/// The wire carries the upstream system's uppercase literals. `Replaced`
/// marks a battery whose swap has been completed; it is excluded from every
/// temporal view until the data layer resets its dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BatteryStatus {
    Healthy,
    Warning,
    Critical,
    Replaced,
}

impl BatteryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatteryStatus::Healthy => "HEALTHY",
            BatteryStatus::Warning => "WARNING",
            BatteryStatus::Critical => "CRITICAL",
            BatteryStatus::Replaced => "REPLACED",
        }
    }
}

/// A standby battery installed inside one technology.
///
/// Date fields arrive as raw strings from the data layer; the engine parses
/// them per record so a single malformed battery flags an issue instead of
/// failing the whole snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    pub id: String,
    pub capacity_ah: f64,
    pub voltage_v: f64,
    pub install_date: String,
    #[serde(default)]
    pub last_check_date: Option<String>,
    pub next_replacement_date: String,
    pub status: BatteryStatus,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub manufacture_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A sub-system at a site (fire alarm panel, intrusion system, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub id: String,
    pub name: String,
    /// System class, e.g. "EPS" or "CCTV". The upstream wire names this `type`.
    #[serde(rename = "type", default)]
    pub category: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub batteries: Vec<Battery>,
}

/// A managed location with its nested maintenance sources.
///
/// Owned by the external data layer; the engine only ever reads a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub internal_notes: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub scheduled_events: Vec<ScheduledEvent>,
    #[serde(default)]
    pub pending_issues: Vec<PendingIssue>,
    #[serde(default)]
    pub tasks: Vec<ManualTask>,
}

impl Site {
    /// All batteries across every technology at this site.
    pub fn batteries(&self) -> impl Iterator<Item = &Battery> + '_ {
        self.technologies.iter().flat_map(|tech| tech.batteries.iter())
    }
}
