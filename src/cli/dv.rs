//! Check digit computation (`rut dv ...`).

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Args;
use rutkit::{MIN_BODY_LEN, compute_check_digit};

use crate::cli::utils::read_values;

/// Arguments for `rut dv`.
#[derive(Args, Debug)]
pub struct DvArgs {
    /// RUT bodies, digits only (falls back to `--from` or stdin).
    pub bodies: Vec<String>,
    /// Read bodies from a file, one per line (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
}

/// Execute `rut dv`.
pub fn handle(args: DvArgs) -> Result<()> {
    let bodies = read_values(args.bodies, args.from)?;
    let mut rejected = Vec::new();
    for body in bodies.iter().map(|b| b.trim()).filter(|b| !b.is_empty()) {
        match compute_check_digit(body) {
            Some(dv) => println!("{}-{}", body, dv),
            None => rejected.push(body.to_string()),
        }
    }
    if !rejected.is_empty() {
        return Err(anyhow!(
            "cannot compute a check digit for {} (bodies need at least {} digits and nothing else)",
            rejected.join(", "),
            MIN_BODY_LEN
        ));
    }
    Ok(())
}
