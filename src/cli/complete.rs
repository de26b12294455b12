//! `taskline complete` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::Path;

use crate::task::Completion;

use super::style::Theme;

#[derive(Args)]
pub struct CompleteArgs {
    /// ID of the task to mark as completed
    id: u64,
}

pub fn run(file: Option<&Path>, args: CompleteArgs) -> Result<()> {
    let theme = Theme::detect();
    let mut store = super::open_store(file, &theme)?;

    match store.complete(args.id) {
        Ok(Completion::Completed(task)) => {
            println!(
                "{}",
                theme.ok(&format!(
                    "✓ Task {} marked as completed: {}",
                    task.id, task.description
                ))
            );
        }
        Ok(Completion::AlreadyCompleted(task)) => {
            println!(
                "{}",
                theme.warn(&format!("⚠ Task {} is already completed", task.id))
            );
        }
        Err(e) => bail!(e),
    }
    Ok(())
}
