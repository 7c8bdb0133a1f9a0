//! Field replay (`rut watch ...`).
//!
//! Every input line is treated as the value of the RUT body input right after
//! a keystroke, so piping a typing session through this command shows what the
//! form would display at each step.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rutkit::{FieldPolicy, RutField, RutFieldState};

use crate::cli::common::OutputFormat;
use crate::cli::utils::{print_json, read_values};

/// Arguments for `rut watch`.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Read field values from a file (`-` or omitted for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value_t = OutputFormat::Text, value_enum)]
    pub format: OutputFormat,
}

/// Execute `rut watch`.
pub fn handle(args: WatchArgs, policy: FieldPolicy) -> Result<()> {
    let field = RutField::new(policy);
    let states: Vec<RutFieldState> = read_values(Vec::new(), args.from)?
        .iter()
        .map(|line| field.on_input(line))
        .collect();

    match args.format {
        OutputFormat::Json => print_json(&states)?,
        OutputFormat::Text => {
            for state in &states {
                let body = if state.body.is_empty() {
                    "-"
                } else {
                    state.body.as_str()
                };
                let dv = state
                    .check_digit
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("{} {} {}", body, dv, state.status.symbol());
            }
        }
    }
    Ok(())
}
