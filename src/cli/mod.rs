//! Command-line interface wiring for the `rut` binary.
//!
//! This module owns the clap definitions and delegates execution to one
//! submodule per command.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rutkit::{DEFAULT_MAX_BODY_LEN, FieldPolicy};

pub mod check;
pub mod common;
pub mod dv;
pub mod format;
pub mod name;
pub mod utils;
pub mod watch;

/// Parsed CLI entrypoint for the `rut` binary.
#[derive(Parser, Debug)]
#[command(name = "rut", version, about = "Chilean RUT validation and formatting")]
pub struct Cli {
    /// Enable debug logging on stderr (overrides RUST_LOG).
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Maximum number of body digits kept by the input field model.
    #[arg(
        long = "max-len",
        env = "RUT_MAX_LEN",
        global = true,
        default_value_t = DEFAULT_MAX_BODY_LEN
    )]
    pub max_len: usize,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn policy(&self) -> FieldPolicy {
        FieldPolicy {
            max_body_len: self.max_len,
        }
    }
}

/// Commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute check digits for RUT bodies.
    Dv(dv::DvArgs),
    /// Validate complete RUTs.
    Check(check::CheckArgs),
    /// Render RUTs as 12.345.678-5.
    Format(format::FormatArgs),
    /// Validate a person's name.
    Name(name::NameArgs),
    /// Replay input-field values, one per line, and show the field state.
    Watch(watch::WatchArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    let policy = cli.policy();
    tracing::debug!(?policy, "starting");
    match cli.command {
        Command::Dv(args) => dv::handle(args),
        Command::Check(args) => check::handle(args),
        Command::Format(args) => format::handle(args),
        Command::Name(args) => name::handle(args),
        Command::Watch(args) => watch::handle(args, policy),
    }
}
