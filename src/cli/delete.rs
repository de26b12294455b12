//! `taskline delete` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::Path;

use super::style::Theme;

#[derive(Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: u64,
}

pub fn run(file: Option<&Path>, args: DeleteArgs) -> Result<()> {
    let theme = Theme::detect();
    let mut store = super::open_store(file, &theme)?;

    let removed = match store.delete(args.id) {
        Ok(task) => task,
        Err(e) => bail!(e),
    };

    println!(
        "{}",
        theme.ok(&format!(
            "✓ Task {} deleted: {}",
            removed.id, removed.description
        ))
    );
    Ok(())
}
