//! Daily habit commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studyflow_core::{DailyHabits, Habit, Tracker};

#[derive(Subcommand)]
pub enum HabitsAction {
    /// Record a full day (flags left off are stored as not done)
    Log {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        wake_up_on_time: bool,
        #[arg(long)]
        sleep_enough: bool,
        #[arg(long)]
        exercise: bool,
        #[arg(long)]
        english_practice: bool,
        #[arg(long)]
        no_porn: bool,
        #[arg(long)]
        no_social_media: bool,
    },
    /// Set one habit, keeping the day's other flags
    Mark {
        /// Habit keyword (e.g. "exercise", "english-practice")
        habit: String,
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Record the habit as missed instead of done
        #[arg(long)]
        off: bool,
    },
    /// Show a date's record
    Show {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Current streak per habit
    Streaks,
    /// This month's completion percentages
    Month,
}

pub fn run(action: HabitsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = Tracker::open()?;
    let today = Local::now().date_naive();

    match action {
        HabitsAction::Log {
            date,
            wake_up_on_time,
            sleep_enough,
            exercise,
            english_practice,
            no_porn,
            no_social_media,
        } => {
            let record = DailyHabits {
                date: date.unwrap_or(today),
                wake_up_on_time,
                sleep_enough,
                exercise,
                english_practice,
                no_porn,
                no_social_media,
            };
            tracker.update_habits(record)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        HabitsAction::Mark { habit, date, off } => {
            let habit = Habit::from_keyword(&habit)
                .ok_or_else(|| format!("unknown habit: {habit}"))?;
            let record = tracker.mark_habit(date.unwrap_or(today), habit, !off)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        HabitsAction::Show { date } => {
            let date = date.unwrap_or(today);
            // an unlogged date reads as all-false
            let record = tracker
                .habits()
                .for_date(date)
                .copied()
                .unwrap_or_else(|| DailyHabits::empty(date));
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        HabitsAction::Streaks => {
            println!("{}", serde_json::to_string_pretty(&tracker.habits().streaks())?);
        }
        HabitsAction::Month => {
            let monthly = tracker.habits().monthly_completion(today);
            println!("{}", serde_json::to_string_pretty(&monthly)?);
        }
    }
    Ok(())
}
