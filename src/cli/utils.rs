//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

/// Resolve the values a command operates on: inline arguments win, then the
/// lines of `--from` (`-` for stdin), then stdin.
pub fn read_values(values: Vec<String>, from: Option<PathBuf>) -> Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }
    let text = match from {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => read_stdin()?,
    };
    Ok(text.lines().map(str::to_string).collect())
}

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}
