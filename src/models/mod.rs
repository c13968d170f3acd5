pub mod event;
pub mod group;
pub mod item;
pub mod site;
pub mod task;

pub use event::ScheduledEvent;
pub use group::Group;
pub use item::{ItemKind, MaintenanceItem};
pub use site::{Battery, BatteryStatus, Site, Technology};
pub use task::{IssueStatus, ManualTask, PendingIssue, TaskPriority, TaskStatus};
