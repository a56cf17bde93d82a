use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studyflow-cli", version, about = "Studyflow CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Study session logging
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Daily habit tracking
    Habits {
        #[command(subcommand)]
        action: commands::habits::HabitsAction,
    },
    /// Weekly study-hour target
    Target {
        #[command(subcommand)]
        action: commands::target::TargetAction,
    },
    /// Aggregate statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Session { action } => commands::session::run(action),
        Commands::Habits { action } => commands::habits::run(action),
        Commands::Target { action } => commands::target::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
