//! CLI front end for the QuicklyMe journaling game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "qm",
    about = "QuicklyMe: write as many real sentences as you can before time runs out",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a piece of text
    Score {
        /// File to score (default: stdin)
        file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Show how each sentence was judged
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Draw a writing prompt
    Prompt {
        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run a timed solo session, reading lines from stdin
    Journal {
        /// Session length in minutes
        #[arg(short, long, default_value = "30")]
        minutes: u64,

        /// RNG seed for the prompt draw
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Score two texts against each other in a two-player room
    Versus {
        /// First player's text
        file1: PathBuf,

        /// Second player's text
        file2: PathBuf,

        /// First player's name
        #[arg(long, default_value = "Player 1")]
        name1: String,

        /// Second player's name
        #[arg(long, default_value = "Player 2")]
        name2: String,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            file,
            json,
            breakdown,
        } => commands::score::run(file.as_deref(), json, breakdown),
        Commands::Prompt { seed } => commands::prompt::run(seed),
        Commands::Journal { minutes, seed } => commands::journal::run(minutes, seed),
        Commands::Versus {
            file1,
            file2,
            name1,
            name2,
        } => commands::versus::run(&file1, &file2, &name1, &name2),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
