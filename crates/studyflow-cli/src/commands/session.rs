//! Study session commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studyflow_core::{Config, EnergyLevel, SessionDraft, Tracker};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Log a completed session
    Add {
        /// Subject studied
        subject: String,
        /// Start time (HH:MM, 24-hour)
        #[arg(long)]
        start: String,
        /// End time (HH:MM, 24-hour)
        #[arg(long)]
        end: String,
        /// Session date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Focus quality 1-5
        #[arg(long, default_value = "3")]
        focus: u8,
        /// Distractions during the session
        #[arg(long, default_value = "0")]
        distractions: u32,
        /// Energy level: low, medium or high
        #[arg(long)]
        energy: Option<String>,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Delete a session by id
    Delete {
        /// Session ID
        id: String,
    },
    /// List sessions for a date
    List {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Parse an energy keyword, falling back for unknown input.
fn parse_energy(raw: Option<&str>, fallback: EnergyLevel) -> EnergyLevel {
    match raw {
        Some("low") => EnergyLevel::Low,
        Some("medium") => EnergyLevel::Medium,
        Some("high") => EnergyLevel::High,
        _ => fallback,
    }
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = Tracker::open()?;
    let today = Local::now().date_naive();

    match action {
        SessionAction::Add {
            subject,
            start,
            end,
            date,
            focus,
            distractions,
            energy,
            notes,
        } => {
            let config = Config::load_or_default();
            let draft = SessionDraft {
                date: date.unwrap_or(today),
                subject,
                start_time: start,
                end_time: end,
                focus_quality: focus,
                distraction_count: distractions,
                energy_level: parse_energy(energy.as_deref(), config.sessions.default_energy),
                notes,
            };
            match tracker.add_session(draft)? {
                Some(session) => {
                    println!("Session recorded: {}", session.id);
                    println!("{}", serde_json::to_string_pretty(&session)?);
                }
                None => {
                    println!("session not recorded: end time must be after start time");
                }
            }
        }
        SessionAction::Delete { id } => {
            if tracker.delete_session(&id)? {
                println!("Session deleted: {id}");
            } else {
                println!("no session with id {id}");
            }
        }
        SessionAction::List { date } => {
            let date = date.unwrap_or(today);
            let sessions = tracker.sessions().for_date(date);
            println!("{}", serde_json::to_string_pretty(&sessions)?);
        }
    }
    Ok(())
}
