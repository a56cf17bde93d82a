//! Weekly target commands.

use chrono::Local;
use clap::Subcommand;
use studyflow_core::Tracker;

#[derive(Subcommand)]
pub enum TargetAction {
    /// This week's target (created on first evaluation)
    Show,
    /// All recorded weekly targets
    History,
}

pub fn run(action: TargetAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = Tracker::open()?;
    let today = Local::now().date_naive();

    match action {
        TargetAction::Show => {
            let target = tracker.ensure_current_week_target(today)?;
            println!("{}", serde_json::to_string_pretty(&target)?);
        }
        TargetAction::History => {
            println!(
                "{}",
                serde_json::to_string_pretty(&tracker.targets().records())?
            );
        }
    }
    Ok(())
}
