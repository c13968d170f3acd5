pub mod config;
pub mod engine;
pub mod ids;
pub mod models;
pub mod storage;

// Re-export commonly used types for convenience.
pub use config::PlannerDefaults;
pub use engine::{ItemState, MonthRef, TaskFilter, TimePolicy};
pub use models::{Group, MaintenanceItem, Site};
pub use storage::{Snapshot, SnapshotStore};
