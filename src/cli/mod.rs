//! CLI command implementations

pub mod add;
pub mod complete;
pub mod definition;
pub mod delete;
pub mod list;
pub mod prompt;
pub mod style;

pub use definition::{Cli, Commands};

use std::path::Path;

use anyhow::Result;

use crate::task::{self, LoadOutcome, TaskStore};
use style::Theme;

/// Open the store at the explicit path or the platform default. Load
/// degradation (corrupt or unreadable document) is rendered as a warning;
/// the command still runs against the empty in-memory store.
pub fn open_store(file: Option<&Path>, theme: &Theme) -> Result<TaskStore> {
    let path = match file {
        Some(p) => p.to_path_buf(),
        None => task::default_tasks_path()?,
    };

    let (store, outcome) = TaskStore::open(path);
    render_load_outcome(&outcome, &store, theme);
    Ok(store)
}

/// Render a degraded load (corrupt or unreadable document) as a warning.
/// Fresh and successful loads print nothing here; the prompt adds its own
/// startup messages for those.
pub fn render_load_outcome(outcome: &LoadOutcome, store: &TaskStore, theme: &Theme) {
    match outcome {
        LoadOutcome::Fresh | LoadOutcome::Loaded(_) => {}
        LoadOutcome::Corrupt => {
            println!(
                "{}",
                theme.warn(&format!(
                    "⚠ Warning: could not parse {}. Starting with an empty task list.",
                    store.path().display()
                ))
            );
        }
        LoadOutcome::Unreadable(e) => {
            println!("{}", theme.err(&format!("✗ Error loading tasks: {}", e)));
        }
    }
}

pub fn parse_id(s: &str) -> Result<u64> {
    s.trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid task ID: {}", s.trim()))
}
