//! eventkit CLI - sign, verify and label events from files or stdin.

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod logging;
mod output;

use commands::{canonicalize, inspect, labels, mode, role, sign, verify};
use config::{GlobalArgs, Settings};

#[derive(Parser)]
#[command(name = "eventkit")]
#[command(about = "eventkit event signing and verification CLI")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign an event and print it
    Sign {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Stamp createdAt with the current time when it is zero
        #[arg(long)]
        stamp: bool,
        /// Pretty-print the signed event
        #[arg(long)]
        pretty: bool,
    },
    /// Verify signatures of events, one JSON object per line
    Verify {
        /// Input JSON Lines file (or stdin if not provided)
        input: Option<String>,
        /// Exit with error code if any verification fails
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the labels derived from an event
    Labels {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the canonical signing payload and its digest
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Summarize an event
    Inspect {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Classify a role rank
    Role {
        /// Raw rank (signed 32-bit integer)
        #[arg(allow_hyphen_values = true)]
        rank: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report whether a mode value selects production
    Mode {
        /// Value to classify (defaults to the configured mode)
        value: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let settings = Settings::from(&cli.global);

    if let Err(e) = logging::init_logging(&settings.log) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Sign {
            input,
            stamp,
            pretty,
        } => sign::run(input, stamp, pretty),
        Commands::Verify {
            input,
            strict,
            json,
        } => verify::run(input, strict, json),
        Commands::Labels { input, json } => labels::run(input, json),
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::Inspect { input } => inspect::run(input, &settings),
        Commands::Role { rank, json } => role::run(rank, json),
        Commands::Mode { value } => mode::run(value, &settings),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
