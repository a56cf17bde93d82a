//! Aggregate statistics commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use serde::Serialize;
use studyflow_core::{dates, last_7_days, Tracker};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's total study hours
    Today,
    /// This week's totals, focus average and subject split
    Week,
    /// Hours and sessions for the last seven days
    Last7,
    /// Full dashboard view
    Dashboard,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TodaySummary {
    date: NaiveDate,
    hours: f64,
    session_count: usize,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = Tracker::open()?;
    let today = Local::now().date_naive();

    match action {
        StatsAction::Today => {
            let summary = TodaySummary {
                date: today,
                hours: tracker.sessions().daily_total_hours(today),
                session_count: tracker.sessions().for_date(today).len(),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Week => {
            let stats = tracker.sessions().weekly_stats(dates::week_start(today));
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Last7 => {
            let days = last_7_days(tracker.sessions(), today);
            println!("{}", serde_json::to_string_pretty(&days)?);
        }
        StatsAction::Dashboard => {
            // evaluating the dashboard counts as evaluating the week
            tracker.ensure_current_week_target(today)?;
            let view = tracker.dashboard(today);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}
