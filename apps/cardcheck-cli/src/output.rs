//! Rendering of command results as text or JSON.

use serde::Serialize;

use cardcheck_core::{BatchReport, Issuer};

use crate::config::{OutputFormat, OutputSettings};
use crate::error::CliResult;

/// Result of `cardcheck check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub digits: Vec<u8>,
    pub luhn_sum: u64,
    pub valid: bool,
    pub issuer: Option<Issuer>,
}

/// Result of `cardcheck demo`, one field per step of the walkthrough.
#[derive(Debug, Clone, Serialize)]
pub struct DemoOutcome {
    /// Verdict for the first known-valid sample.
    pub valid_sample: bool,
    /// Verdict for the first known-invalid sample.
    pub invalid_sample: bool,
    /// Every failing sample, in batch order.
    pub invalid: Vec<Vec<u8>>,
    /// Issuers of the third mystery sample alone.
    pub mystery_issuers: Vec<Issuer>,
    /// Issuers across the whole sample batch.
    pub batch_issuers: Vec<Issuer>,
    /// Issuers of the failing samples only.
    pub invalid_issuers: Vec<Issuer>,
}

/// Renders a digit sequence compactly; elements above 9 are bracketed.
pub fn format_digits(digits: &[u8]) -> String {
    digits
        .iter()
        .map(|&d| {
            if d <= cardcheck_core::MAX_DIGIT {
                d.to_string()
            } else {
                format!("[{}]", d)
            }
        })
        .collect()
}

fn format_issuers(issuers: &[Issuer]) -> String {
    if issuers.is_empty() {
        return "(none)".to_string();
    }
    issuers
        .iter()
        .map(Issuer::label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn to_json<T: Serialize>(value: &T, settings: &OutputSettings) -> CliResult<String> {
    let json = if settings.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Renders a single-sequence check.
pub fn render_check(outcome: &CheckOutcome, settings: &OutputSettings) -> CliResult<String> {
    if settings.format == OutputFormat::Json {
        return to_json(outcome, settings);
    }

    let issuer = outcome.issuer.map_or("unknown", |i| i.label());
    Ok(format!(
        "{}: {} (luhn sum {}, issuer {})",
        format_digits(&outcome.digits),
        if outcome.valid { "valid" } else { "invalid" },
        outcome.luhn_sum,
        issuer
    ))
}

/// Renders a batch report.
pub fn render_report(report: &BatchReport, settings: &OutputSettings) -> CliResult<String> {
    if settings.format == OutputFormat::Json {
        return to_json(report, settings);
    }

    let mut lines = vec![
        format!("total:   {}", report.total),
        format!("valid:   {}", report.valid_count),
        format!("invalid: {}", report.invalid_count),
    ];
    if !report.invalid_indices.is_empty() {
        let indices: Vec<String> = report.invalid_indices.iter().map(usize::to_string).collect();
        lines.push(format!("invalid at: {}", indices.join(", ")));
    }
    lines.push(format!("issuers of invalid: {}", format_issuers(&report.issuers)));
    for entry in &report.unrecognized {
        let digit = entry
            .leading_digit
            .map_or_else(|| "empty".to_string(), |d| d.to_string());
        lines.push(format!("no issuer for sequence {} (leading {})", entry.index, digit));
    }
    Ok(lines.join("\n"))
}

/// Renders the demo walkthrough.
pub fn render_demo(outcome: &DemoOutcome, settings: &OutputSettings) -> CliResult<String> {
    if settings.format == OutputFormat::Json {
        return to_json(outcome, settings);
    }

    let mut lines = vec![
        format!("valid sample:   {}", outcome.valid_sample),
        format!("invalid sample: {}", outcome.invalid_sample),
        format!("invalid cards ({}):", outcome.invalid.len()),
    ];
    lines.extend(outcome.invalid.iter().map(|d| format!("  {}", format_digits(d))));
    lines.push(format!("issuers of mystery 3: {}", format_issuers(&outcome.mystery_issuers)));
    lines.push(format!("issuers of batch:     {}", format_issuers(&outcome.batch_issuers)));
    lines.push(format!("issuers of invalid:   {}", format_issuers(&outcome.invalid_issuers)));
    Ok(lines.join("\n"))
}
