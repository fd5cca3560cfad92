use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "prayerfeed-cli", version, about = "PrayerFeed CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive prayer session (state lives for the session only)
    Session {
        /// Start from the prototype seed content instead of an empty store
        #[arg(long)]
        seeded: bool,
        /// Path to a goals TOML file
        #[arg(long)]
        goals: Option<PathBuf>,
    },
    /// Show the resolved goal configuration
    Goals {
        /// Path to a goals TOML file
        #[arg(long)]
        goals: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Session { seeded, goals } => commands::session::run(seeded, goals.as_deref()),
        Commands::Goals { goals } => commands::goals::run(goals.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
