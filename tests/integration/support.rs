#![allow(dead_code)]

use chrono::NaiveDate;
use maintbase::models::{
    Battery, BatteryStatus, Group, IssueStatus, ManualTask, PendingIssue, ScheduledEvent, Site,
    TaskPriority, TaskStatus, Technology,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn site(id: &str) -> Site {
    Site {
        id: id.to_string(),
        name: format!("Site {id}"),
        address: String::new(),
        description: String::new(),
        internal_notes: None,
        group_id: None,
        lat: None,
        lng: None,
        technologies: Vec::new(),
        scheduled_events: Vec::new(),
        pending_issues: Vec::new(),
        tasks: Vec::new(),
    }
}

pub fn group(id: &str, life_months: u32, lead_weeks: u32) -> Group {
    Group {
        id: id.to_string(),
        name: format!("Group {id}"),
        color: None,
        default_battery_life_months: Some(life_months),
        notification_lead_time_weeks: Some(lead_weeks),
    }
}

pub fn battery(id: &str, next_replacement: &str, status: BatteryStatus) -> Battery {
    Battery {
        id: id.to_string(),
        capacity_ah: 7.0,
        voltage_v: 12.0,
        install_date: "2023-01-01".to_string(),
        last_check_date: None,
        next_replacement_date: next_replacement.to_string(),
        status,
        serial_number: None,
        manufacture_date: None,
        notes: None,
    }
}

pub fn technology(id: &str, name: &str, batteries: Vec<Battery>) -> Technology {
    Technology {
        id: id.to_string(),
        name: name.to_string(),
        category: "EPS".to_string(),
        location: None,
        batteries,
    }
}

pub fn event(id: &str, title: &str, next_date: &str, interval: &str) -> ScheduledEvent {
    ScheduledEvent {
        id: id.to_string(),
        title: title.to_string(),
        start_date: next_date.to_string(),
        next_date: next_date.to_string(),
        interval: interval.to_string(),
        description: None,
        future_notes: None,
        is_active: true,
        precision_on_day: true,
    }
}

pub fn open_issue(id: &str, created_at: &str) -> PendingIssue {
    PendingIssue {
        id: id.to_string(),
        text: format!("Issue {id}"),
        created_at: created_at.to_string(),
        created_by: "tech".to_string(),
        status: IssueStatus::Open,
    }
}

pub fn manual_task(id: &str, deadline: &str, status: TaskStatus) -> ManualTask {
    ManualTask {
        id: id.to_string(),
        description: format!("Task {id}"),
        deadline: deadline.to_string(),
        priority: TaskPriority::Medium,
        status,
        note: None,
        created_at: "2024-01-01".to_string(),
        created_by: "tech".to_string(),
    }
}

/// A site carrying one healthy battery with the given due date.
pub fn site_with_battery(site_id: &str, battery_id: &str, due: &str) -> Site {
    let mut s = site(site_id);
    s.technologies = vec![technology(
        "t1",
        "Fire alarm panel",
        vec![battery(battery_id, due, BatteryStatus::Healthy)],
    )];
    s
}
