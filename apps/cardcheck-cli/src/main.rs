//! # cardcheck
//!
//! Command-line harness around `cardcheck-core`.
//!
//! ## Usage
//! ```bash
//! # Walkthrough over the built-in samples (default)
//! cardcheck demo
//!
//! # One sequence
//! cardcheck check --digits 4,5,3,9,6,7,7,9,0,8,0,1,6,8,0,8
//!
//! # A JSON file holding [[4,5,...], [3,7,...], ...]
//! cardcheck batch cards.json --format json --strict
//! ```
//!
//! Results go to stdout; logs (including the "Company not found" notice) go
//! to stderr, filtered by `RUST_LOG` or the configured `logging.filter`.

mod cli;
mod config;
mod error;
mod output;
mod samples;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cardcheck_core::{classify_issuers, filter_invalid, luhn, BatchReport, DigitSequence};

use crate::cli::{Cli, Command};
use crate::config::CardcheckConfig;
use crate::error::CliResult;
use crate::output::{CheckOutcome, DemoOutcome};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        CardcheckConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.strict {
        config.input.strict = true;
    }

    init_tracing(&config.logging.filter);
    debug!(format = %config.output.format, strict = config.input.strict, "Configuration loaded");

    let rendered = match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&config)?,
        Command::Check { digits } => run_check(digits, &config)?,
        Command::Batch { path } => run_batch(&path, &config)
            .with_context(|| format!("Failed to check batch {}", path.display()))?,
    };

    println!("{}", rendered);
    Ok(())
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins over the configured filter.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Validates two samples, filters the batch, then classifies issuers three ways.
fn run_demo(config: &CardcheckConfig) -> CliResult<String> {
    let batch = samples::batch();
    info!(samples = batch.len(), "Running demo over sample batch");

    let invalid = filter_invalid(&batch);
    let outcome = DemoOutcome {
        valid_sample: luhn::validate(&samples::VALID_1),
        invalid_sample: luhn::validate(&samples::INVALID_1),
        invalid: invalid.iter().map(|seq| seq.to_vec()).collect(),
        mystery_issuers: classify_issuers(&[samples::MYSTERY_3.as_slice()]),
        batch_issuers: classify_issuers(&batch),
        invalid_issuers: classify_issuers(&invalid),
    };

    output::render_demo(&outcome, &config.output)
}

/// Checks one sequence given on the command line.
fn run_check(digits: Vec<u8>, config: &CardcheckConfig) -> CliResult<String> {
    let outcome = if config.input.strict {
        let seq = DigitSequence::new(digits).map_err(cardcheck_core::CoreError::from)?;
        CheckOutcome {
            luhn_sum: luhn::checksum(seq.digits()),
            valid: seq.is_valid(),
            issuer: seq.issuer(),
            digits: seq.into_inner(),
        }
    } else {
        CheckOutcome {
            luhn_sum: luhn::checksum(&digits),
            valid: luhn::validate(&digits),
            issuer: digits
                .first()
                .and_then(|&d| cardcheck_core::Issuer::from_leading_digit(d)),
            digits,
        }
    };

    output::render_check(&outcome, &config.output)
}

/// Checks every sequence of a JSON batch file.
fn run_batch(path: &Path, config: &CardcheckConfig) -> CliResult<String> {
    let contents = std::fs::read_to_string(path)?;
    let batch: Vec<Vec<u8>> = serde_json::from_str(&contents)?;
    info!(?path, sequences = batch.len(), "Batch loaded");

    let report = if config.input.strict {
        BatchReport::try_build(&batch)?
    } else {
        BatchReport::build(&batch)
    };

    output::render_report(&report, &config.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use std::io::Write;

    fn json_config() -> CardcheckConfig {
        let mut config = CardcheckConfig::default();
        config.output.format = OutputFormat::Json;
        config.output.pretty = false;
        config
    }

    #[test]
    fn test_demo_json() {
        let rendered = run_demo(&json_config()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["valid_sample"], serde_json::json!(true));
        assert_eq!(value["invalid_sample"], serde_json::json!(false));
        assert_eq!(value["invalid"].as_array().unwrap().len(), 8);
        assert_eq!(value["mystery_issuers"], serde_json::json!(["Discover"]));
        assert_eq!(
            value["batch_issuers"],
            serde_json::json!(["Visa", "Mastercard", "Amex", "Discover"])
        );
        assert_eq!(
            value["invalid_issuers"],
            serde_json::json!(["Visa", "Mastercard", "Amex", "Discover"])
        );
    }

    #[test]
    fn test_check_text() {
        let rendered = run_check(samples::VALID_1.to_vec(), &CardcheckConfig::default()).unwrap();
        assert_eq!(rendered, "4539677908016808: valid (luhn sum 80, issuer Visa)");
    }

    #[test]
    fn test_check_strict_rejects_out_of_range() {
        let mut config = CardcheckConfig::default();
        config.input.strict = true;
        assert!(matches!(run_check(vec![4, 10], &config), Err(CliError::Core(_))));

        config.input.strict = false;
        assert!(run_check(vec![4, 10], &config).is_ok());
    }

    #[test]
    fn test_batch_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[[4,5,3,9,6,7,7,9,0,8,0,1,6,8,0,8],[3,7,5,7,9,6,0,8,4,4,5,9,9,1,4],[]]"
        )
        .unwrap();

        let rendered = run_batch(file.path(), &json_config()).unwrap();
        let report: BatchReport = serde_json::from_str(&rendered).unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.invalid_indices, vec![1]);
        assert_eq!(report.issuer_labels(), vec!["Amex"]);
    }

    #[test]
    fn test_batch_file_strict() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[4,0],[4,12]]").unwrap();

        let mut config = json_config();
        assert!(run_batch(file.path(), &config).is_ok());

        config.input.strict = true;
        assert!(matches!(
            run_batch(file.path(), &config),
            Err(CliError::Core(_))
        ));
    }

    #[test]
    fn test_batch_file_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[4,-1]]").unwrap();
        assert!(matches!(
            run_batch(file.path(), &json_config()),
            Err(CliError::Json(_))
        ));
    }
}
