//! Name validation (`rut name ...`).

use anyhow::{Result, anyhow};
use clap::Args;
use rutkit::NameField;

/// Arguments for `rut name`.
#[derive(Args, Debug)]
pub struct NameArgs {
    /// Name to validate; quote names containing spaces.
    pub name: String,
    /// Exit with an error if the name is invalid.
    #[arg(long)]
    pub strict: bool,
}

/// Execute `rut name`.
pub fn handle(args: NameArgs) -> Result<()> {
    let status = NameField.on_input(&args.name);
    println!("{} {}", status.symbol(), args.name);
    if args.strict && !status.is_valid() {
        return Err(anyhow!(
            "'{}' may only contain letters, accented vowels, ñ and spaces",
            args.name
        ));
    }
    Ok(())
}
