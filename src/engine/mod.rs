//! The scheduling and prioritization core: a pure projection over one
//! snapshot of site data plus an explicit "today".

pub mod classify;
pub mod issues;
pub mod normalize;
pub mod policy;
pub mod recurrence;
pub mod rollover;
pub mod stats;
pub mod views;

pub use classify::{classify, ItemState};
pub use issues::{RecordIssue, RecordIssueReason};
pub use normalize::{normalize, NormalizedItems};
pub use policy::{EffectivePolicy, TimePolicy};
pub use recurrence::{RecurrenceInterval, UnknownIntervalError};
pub use stats::{summarize, FleetSummary};
pub use views::{
    calendar_month, month_feed, priority_feed, task_feed, CalendarMonth, ClassifiedItem,
    FeedResult, GlobalTask, MonthRef, TaskFeed, TaskFilter,
};
