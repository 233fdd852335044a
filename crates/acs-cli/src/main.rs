//! CLI frontend for the Adventure Construction Set.

mod commands;

use std::path::PathBuf;
use std::process;

use acs_fiction::EngineConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "acs",
    about = "Adventure Construction Set: play and check text adventures",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an adventure interactively
    Play {
        /// Adventure file (JSON)
        file: PathBuf,

        /// RNG seed for reproducible dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// Describe rooms in full on every visit
        #[arg(long)]
        verbose_rooms: bool,

        /// Don't mention spelling corrections
        #[arg(long)]
        no_corrections: bool,
    },

    /// Validate an adventure file and report diagnostics
    Check {
        /// Adventure file (JSON)
        file: PathBuf,
    },

    /// Show how a sentence is interpreted
    Parse {
        /// The sentence, as you would type it in play
        #[arg(required = true)]
        words: Vec<String>,

        /// Print the action as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a table of rooms with their exits and contents
    Inspect {
        /// Adventure file (JSON)
        file: PathBuf,
    },
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            file,
            seed,
            verbose_rooms,
            no_corrections,
        } => {
            let mut config = EngineConfig::default()
                .with_verbose_rooms(verbose_rooms)
                .with_echo_corrections(!no_corrections);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            commands::play::run(&file, config)
        }
        Commands::Check { file } => commands::check::run(&file),
        Commands::Parse { words, json } => commands::parse::run(&words, json),
        Commands::Inspect { file } => commands::inspect::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
