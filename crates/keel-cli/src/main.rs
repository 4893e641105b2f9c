//! CLI frontend for the Even Keel wellbeing game.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "keel",
    about = "Even Keel — a day in the life, one choice at a time",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session
    Play {
        /// RNG seed for reproducible scenario draws
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// List the scenario cards and their choices
    Scenarios {
        /// Filter by place: gym, work, home
        place: Option<String>,

        /// Emit the tables as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the ways a day can end, and what each one teaches
    Lessons,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed } => commands::play::run(seed),
        Commands::Scenarios { place, json } => commands::scenarios::run(place.as_deref(), json),
        Commands::Lessons => commands::lessons::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
