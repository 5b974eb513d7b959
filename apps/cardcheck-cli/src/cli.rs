//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Luhn checks and issuer lookup for card-like digit sequences")]
#[command(name = "cardcheck")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json); overrides config and CARDCHECK_FORMAT
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Reject elements above 9 instead of checking them as-is
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the walkthrough over the built-in sample batch
    Demo,

    /// Check a single sequence
    Check {
        /// Digits, most-significant first, comma separated (e.g. 4,5,3,9).
        /// At least one digit is required; check an empty sequence through
        /// `batch` with `[[]]`
        #[arg(short, long, value_delimiter = ',', required = true, num_args = 1..)]
        digits: Vec<u8>,
    },

    /// Check a batch read from a JSON file holding an array of digit arrays
    Batch {
        /// Path to the JSON batch file
        path: PathBuf,
    },
}
