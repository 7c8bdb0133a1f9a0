//! Display formatting (`rut format ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rutkit::{format_table, strip_to_readonly_display};

use crate::cli::utils::read_values;

/// Arguments for `rut format`.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Raw values to format (falls back to `--from` or stdin).
    pub values: Vec<String>,
    /// Read values from a file, one per line (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Keep the check digit's case as typed instead of upper-casing it.
    #[arg(long)]
    pub readonly: bool,
}

/// Execute `rut format`. Each input line yields exactly one output line,
/// blank when nothing could be formatted.
pub fn handle(args: FormatArgs) -> Result<()> {
    let values = read_values(args.values, args.from)?;
    let rendered: Vec<String> = if args.readonly {
        values
            .iter()
            .map(|v| strip_to_readonly_display(v.trim()))
            .collect()
    } else {
        format_table(&values)
    };
    for line in rendered {
        println!("{}", line);
    }
    Ok(())
}
