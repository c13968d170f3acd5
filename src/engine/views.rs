//! The consumer-facing projections: priority feed, month feed, calendar
//! day buckets, and the global task filters.
//!
//! Every projection is a full recomputation over the snapshot plus an
//! explicit "today"; nothing is cached or advanced between calls.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::engine::classify::{classify, ItemState};
use crate::engine::issues::{require_date, RecordIssue};
use crate::engine::normalize::{normalize, NormalizedItems};
use crate::engine::policy::TimePolicy;
use crate::models::{Group, MaintenanceItem, ManualTask, Site, TaskStatus};

/// One calendar month, as selected in the planner or calendar UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    /// `None` unless `month` is 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month a given date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following calendar month, rolling over the year after December.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month is validated on construction")
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .expect("month start has a predecessor")
    }
}

/// A normalized item together with its temporal bucket.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedItem {
    pub state: ItemState,
    #[serde(flatten)]
    pub item: MaintenanceItem,
}

/// Items of one feed plus the malformed records encountered on the way.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedResult {
    pub items: Vec<ClassifiedItem>,
    pub issues: Vec<RecordIssue>,
}

/// Normalizes and classifies the whole snapshot, using each site's own
/// lead-time window.
fn classified_items(
    sites: &[Site],
    groups: &[Group],
    policy: &TimePolicy,
    today: NaiveDate,
) -> (Vec<ClassifiedItem>, Vec<RecordIssue>) {
    let NormalizedItems { items, issues } = normalize(sites);
    let lead_by_site: HashMap<&str, u32> = sites
        .iter()
        .map(|site| (site.id.as_str(), policy.resolve(site, groups).lead_time_weeks))
        .collect();
    let fallback = policy.defaults().notification_lead_time_weeks;
    let classified = items
        .into_iter()
        .map(|item| {
            let lead = lead_by_site
                .get(item.site_id.as_str())
                .copied()
                .unwrap_or(fallback);
            ClassifiedItem {
                state: classify(&item, today, lead),
                item,
            }
        })
        .collect();
    (classified, issues)
}

/// Everything that needs attention now: overdue and upcoming items,
/// ascending by due date. Ties keep the normalizer's emission order.
pub fn priority_feed(
    sites: &[Site],
    groups: &[Group],
    policy: &TimePolicy,
    today: NaiveDate,
) -> FeedResult {
    let (mut items, issues) = classified_items(sites, groups, policy, today);
    items.retain(|entry| entry.state.needs_attention());
    items.sort_by_key(|entry| entry.item.due_date);
    FeedResult { items, issues }
}

/// Scheduled items falling inside one calendar month, ascending by due
/// date. Anything already surfaced by the priority feed is excluded, so the
/// two feeds never show the same item twice.
pub fn month_feed(
    sites: &[Site],
    groups: &[Group],
    policy: &TimePolicy,
    today: NaiveDate,
    month: MonthRef,
) -> FeedResult {
    let (all, issues) = classified_items(sites, groups, policy, today);
    let priority_ids: HashSet<String> = all
        .iter()
        .filter(|entry| entry.state.needs_attention())
        .map(|entry| entry.item.id.clone())
        .collect();
    let mut items: Vec<ClassifiedItem> = all
        .into_iter()
        .filter(|entry| entry.state == ItemState::Scheduled)
        .filter(|entry| month.contains(entry.item.due_date))
        .filter(|entry| !priority_ids.contains(&entry.item.id))
        .collect();
    items.sort_by_key(|entry| entry.item.due_date);
    FeedResult { items, issues }
}

/// One occurrence placed on the calendar grid. For recurring events the
/// occurrence date may lie past the item's stored due date.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub state: ItemState,
    pub item: MaintenanceItem,
}

/// Day buckets for one visible month, keyed by date in ascending order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CalendarMonth {
    pub days: BTreeMap<NaiveDate, Vec<CalendarEntry>>,
    pub issues: Vec<RecordIssue>,
}

/// Groups every item by exact date for the grid, regardless of state: the
/// calendar shows everything and the feeds do the filtering. Recurring events
/// are expanded across the month, so occurrences beyond the single stored
/// next date appear too.
pub fn calendar_month(
    sites: &[Site],
    groups: &[Group],
    policy: &TimePolicy,
    today: NaiveDate,
    month: MonthRef,
) -> CalendarMonth {
    let (all, issues) = classified_items(sites, groups, policy, today);
    let (first, last) = (month.first_day(), month.last_day());
    let mut days: BTreeMap<NaiveDate, Vec<CalendarEntry>> = BTreeMap::new();
    for entry in all {
        match entry.item.recurrence {
            Some(interval) => {
                for date in interval.occurrences_in_range(entry.item.due_date, first, last) {
                    days.entry(date).or_default().push(CalendarEntry {
                        date,
                        state: entry.state,
                        item: entry.item.clone(),
                    });
                }
            }
            None => {
                if month.contains(entry.item.due_date) {
                    let date = entry.item.due_date;
                    days.entry(date).or_default().push(CalendarEntry {
                        date,
                        state: entry.state,
                        item: entry.item,
                    });
                }
            }
        }
    }
    CalendarMonth { days, issues }
}

/// Buckets offered by the global task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    Overdue,
    ThisMonth,
    NextMonth,
}

impl TaskFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::Overdue => "overdue",
            TaskFilter::ThisMonth => "this_month",
            TaskFilter::NextMonth => "next_month",
        }
    }
}

/// A manual task paired with the site it belongs to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalTask {
    pub site_id: String,
    pub site_name: String,
    pub deadline: NaiveDate,
    pub task: ManualTask,
}

/// Task-list result for one filter.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskFeed {
    pub tasks: Vec<GlobalTask>,
    pub issues: Vec<RecordIssue>,
}

/// The global task list: manual tasks across all sites, never `DONE`,
/// bucketed by deadline: strictly before today, inside the current
/// calendar month, or inside the next one (year rollover included).
/// Ascending by deadline.
pub fn task_feed(sites: &[Site], filter: TaskFilter, today: NaiveDate) -> TaskFeed {
    let this_month = MonthRef::of(today);
    let next_month = this_month.next();
    let mut feed = TaskFeed::default();
    for site in sites {
        for task in &site.tasks {
            if task.status == TaskStatus::Done {
                continue;
            }
            let deadline = match require_date(&task.deadline, &site.id, &task.id, "deadline") {
                Ok(date) => date,
                Err(issue) => {
                    feed.issues.push(issue);
                    continue;
                }
            };
            let selected = match filter {
                TaskFilter::Overdue => deadline < today,
                TaskFilter::ThisMonth => this_month.contains(deadline),
                TaskFilter::NextMonth => next_month.contains(deadline),
            };
            if selected {
                feed.tasks.push(GlobalTask {
                    site_id: site.id.clone(),
                    site_name: site.name.clone(),
                    deadline,
                    task: task.clone(),
                });
            }
        }
    }
    feed.tasks.sort_by_key(|entry| entry.deadline);
    feed
}
