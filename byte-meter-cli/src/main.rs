//! byte-meter CLI
//!
//! Command-line interface for formatting byte counts and transfer rates
//! in binary units.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

mod commands;
mod error;

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "byte-meter")]
#[command(about = "Format byte counts and transfer rates in binary units", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format byte counts as human-readable sizes
    Format {
        /// Byte counts to format (plain integers, '_' separators allowed)
        #[arg(required = true)]
        counts: Vec<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show byte and bit rates for an amount transferred over a duration
    Rate {
        /// Bytes transferred (plain integer, '_' separators allowed)
        count: String,

        /// Elapsed time in seconds (must be greater than zero)
        seconds: f64,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Accumulate byte counts into a single total
    Sum {
        /// Byte counts to accumulate
        #[arg(required = true)]
        counts: Vec<String>,

        /// Also report rates for the total over this many seconds
        #[arg(short, long)]
        seconds: Option<f64>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the binary units and their scales
    Units,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Format { counts, json } => commands::format::run_format(&counts, json),
        Commands::Rate {
            count,
            seconds,
            json,
        } => commands::rate::run_rate(&count, seconds, json),
        Commands::Sum {
            counts,
            seconds,
            json,
        } => commands::sum::run_sum(&counts, seconds, json),
        Commands::Units => commands::units::run_units(),
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}
