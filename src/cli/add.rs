//! `taskline add` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::Path;

use super::style::Theme;

#[derive(Args)]
pub struct AddArgs {
    /// Task description (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1.., value_name = "DESCRIPTION")]
    description: Vec<String>,
}

pub fn run(file: Option<&Path>, args: AddArgs) -> Result<()> {
    let theme = Theme::detect();
    let mut store = super::open_store(file, &theme)?;

    let description = args.description.join(" ");
    let id = match store.add(&description) {
        Ok(id) => id,
        Err(e) => bail!(e),
    };

    println!(
        "{}",
        theme.ok(&format!(
            "✓ Task added with ID {}: {}",
            id,
            description.trim()
        ))
    );
    Ok(())
}
