//! Local JSON cache of the site/group snapshot.
//!
//! The engine is transport-agnostic: whether records arrive over REST or
//! from this cache file is the caller's business. The store only moves the
//! snapshot between disk and memory; it never touches computed views.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::{Group, Site};

/// Everything the engine reads: the sites with their nested collections
/// plus the group list for policy resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub sites: Vec<Site>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Reads and writes one snapshot file.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot; a missing file yields an empty one.
    pub fn load(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            return Ok(Snapshot::default());
        }
        let data = fs::read(&self.path)
            .with_context(|| format!("Failed to read snapshot at {}", self.path.display()))?;
        let snapshot = serde_json::from_slice(&data)
            .with_context(|| format!("Failed to parse snapshot at {}", self.path.display()))?;
        Ok(snapshot)
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(snapshot)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write snapshot at {}", self.path.display()))?;
        Ok(())
    }
}
