//! RUT validation (`rut check ...`).

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use clap::Args;
use rutkit::Rut;
use serde::Serialize;

use crate::cli::common::OutputFormat;
use crate::cli::utils::{print_json, read_values};

/// Arguments for `rut check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// RUTs to validate, in any punctuation (falls back to `--from` or stdin).
    pub values: Vec<String>,
    /// Read RUTs from a file, one per line (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value_t = OutputFormat::Text, value_enum)]
    pub format: OutputFormat,
    /// Exit with an error if any RUT is invalid.
    #[arg(long)]
    pub strict: bool,
}

/// Result of checking one input line.
#[derive(Debug, Serialize)]
pub struct CheckEntry {
    pub input: String,
    pub valid: bool,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Parsed RUT or the reason parsing failed.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    Valid { rut: Rut },
    Invalid { error: String },
}

/// Summary emitted by `rut check --format json`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub generated_at: DateTime<Utc>,
    pub valid: usize,
    pub invalid: usize,
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    /// Check every non-blank value.
    pub fn build(values: &[String]) -> Self {
        let entries: Vec<CheckEntry> = values
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(check_one)
            .collect();
        let valid = entries.iter().filter(|e| e.valid).count();
        Self {
            generated_at: Utc::now(),
            valid,
            invalid: entries.len() - valid,
            entries,
        }
    }
}

fn check_one(input: &str) -> CheckEntry {
    match input.parse::<Rut>() {
        Ok(rut) => CheckEntry {
            input: input.to_string(),
            valid: true,
            outcome: CheckOutcome::Valid { rut },
        },
        Err(err) => CheckEntry {
            input: input.to_string(),
            valid: false,
            outcome: CheckOutcome::Invalid {
                error: err.to_string(),
            },
        },
    }
}

/// Execute `rut check`.
pub fn handle(args: CheckArgs) -> Result<()> {
    let values = read_values(args.values, args.from)?;
    let report = CheckReport::build(&values);
    tracing::debug!(valid = report.valid, invalid = report.invalid, "check finished");

    match args.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => {
            for entry in &report.entries {
                match &entry.outcome {
                    CheckOutcome::Valid { rut } => println!("✔ {}", rut),
                    CheckOutcome::Invalid { error } => println!("✖ {}: {}", entry.input, error),
                }
            }
        }
    }

    if args.strict && report.invalid > 0 {
        return Err(anyhow!(
            "{} of {} RUTs failed validation",
            report.invalid,
            report.entries.len()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entries_carry_either_rut_or_error() {
        let values = vec!["12.345.678-5".to_string(), "  ".to_string(), "123".to_string()];
        let report = CheckReport::build(&values);
        assert_eq!(report.valid, 1);
        assert_eq!(report.invalid, 1);

        let json = serde_json::to_value(&report.entries).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"input": "12.345.678-5", "valid": true, "rut": "12.345.678-5"},
                {"input": "123", "valid": false, "error": "body has 2 digits; at least 7 are required"}
            ])
        );
    }
}
