//! Shared clap helper types for CLI commands.

use clap::ValueEnum;

/// Output formats accepted by reporting commands.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
