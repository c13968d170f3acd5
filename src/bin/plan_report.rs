use std::env;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use maintbase::config::PlannerDefaults;
use maintbase::engine::{calendar_month, month_feed, priority_feed, summarize, task_feed};
use maintbase::engine::{MonthRef, TaskFilter, TimePolicy};
use maintbase::storage::SnapshotStore;

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse()?;

    let store = SnapshotStore::new(&args.snapshot);
    let snapshot = store.load()?;

    // "Now" is resolved here, at the edge; everything below is a pure
    // function of the snapshot and these explicit dates.
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let month = args.month.unwrap_or_else(|| MonthRef::of(today));
    let policy = TimePolicy::new(PlannerDefaults::default());

    let summary = summarize(&snapshot.sites, today);
    println!("Fleet summary ({today})");
    println!(
        "  {} sites, {} batteries ({} healthy / {} warning / {} critical / {} replaced)",
        summary.total_sites,
        summary.total_batteries,
        summary.battery_status.healthy,
        summary.battery_status.warning,
        summary.battery_status.critical,
        summary.battery_status.replaced,
    );
    println!("  {} overdue open tasks", summary.overdue_tasks);

    let priority = priority_feed(&snapshot.sites, &snapshot.groups, &policy, today);
    println!("\nNeeds attention ({} items)", priority.items.len());
    for entry in &priority.items {
        println!(
            "  [{}] {}: {} ({}, due {})",
            entry.state.as_str(),
            entry.item.site_name,
            entry.item.label,
            entry.item.detail,
            entry.item.due_date,
        );
    }

    let planned = month_feed(&snapshot.sites, &snapshot.groups, &policy, today, month);
    println!(
        "\nPlanned for {}-{:02} ({} items)",
        month.year(),
        month.month(),
        planned.items.len()
    );
    for entry in &planned.items {
        println!(
            "  {}: {} (due {})",
            entry.item.site_name, entry.item.label, entry.item.due_date
        );
    }

    let calendar = calendar_month(&snapshot.sites, &snapshot.groups, &policy, today, month);
    let occurrence_count: usize = calendar.days.values().map(Vec::len).sum();
    println!(
        "\nCalendar {}-{:02}: {} occurrences across {} days",
        month.year(),
        month.month(),
        occurrence_count,
        calendar.days.len()
    );

    let tasks = task_feed(&snapshot.sites, args.tasks, today);
    println!(
        "\nTasks [{}] ({} tasks)",
        args.tasks.as_str(),
        tasks.tasks.len()
    );
    for entry in &tasks.tasks {
        println!(
            "  {}: {} (deadline {})",
            entry.site_name, entry.task.description, entry.deadline
        );
    }

    let mut issues = priority.issues;
    issues.extend(tasks.issues);
    if !issues.is_empty() {
        println!("\nData issues ({})", issues.len());
        for issue in &issues {
            println!("  {issue}");
        }
    }

    Ok(())
}

struct CliArgs {
    snapshot: String,
    today: Option<NaiveDate>,
    month: Option<MonthRef>,
    tasks: TaskFilter,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut snapshot = None;
        let mut today = None;
        let mut month = None;
        let mut tasks = TaskFilter::Overdue;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--snapshot" => {
                    let value = args.next().context("Expected a path after --snapshot")?;
                    snapshot = Some(value);
                }
                "--today" => {
                    let value = args.next().context("Expected a date after --today")?;
                    let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                        .with_context(|| format!("'{value}' is not a YYYY-MM-DD date"))?;
                    today = Some(parsed);
                }
                "--month" => {
                    let value = args.next().context("Expected YYYY-MM after --month")?;
                    month = Some(parse_month(&value)?);
                }
                "--tasks" => {
                    let value = args.next().context(
                        "Expected overdue|this-month|next-month after --tasks",
                    )?;
                    tasks = match value.as_str() {
                        "overdue" => TaskFilter::Overdue,
                        "this-month" => TaskFilter::ThisMonth,
                        "next-month" => TaskFilter::NextMonth,
                        other => {
                            return Err(anyhow!(
                                "Unknown task filter '{other}'. Use overdue, this-month, or next-month."
                            ));
                        }
                    };
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        let snapshot = snapshot.context("--snapshot <path> is required")?;
        Ok(Self {
            snapshot,
            today,
            month,
            tasks,
        })
    }
}

fn parse_month(raw: &str) -> Result<MonthRef> {
    let (year, month) = raw
        .split_once('-')
        .with_context(|| format!("'{raw}' is not a YYYY-MM month"))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("'{raw}' has an invalid year"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("'{raw}' has an invalid month"))?;
    MonthRef::new(year, month).with_context(|| format!("month in '{raw}' is outside 1-12"))
}

fn print_usage() {
    println!("maintbase maintenance report");
    println!("Prints the fleet summary, planner feeds, and task list for a snapshot.");
    println!();
    println!("Usage: plan_report --snapshot <path> [options]");
    println!("  --snapshot <path>   JSON snapshot with sites and groups (required)");
    println!("  --today <date>      Reference day, YYYY-MM-DD (default: local today)");
    println!("  --month <month>     Visible month, YYYY-MM (default: today's month)");
    println!("  --tasks <filter>    overdue | this-month | next-month (default: overdue)");
}
