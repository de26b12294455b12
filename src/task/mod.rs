//! Task tracking - data model and JSON-backed store

pub mod error;
pub mod model;
pub mod store;

pub use error::StoreError;
pub use model::Task;
pub use store::{Completion, LoadOutcome, TaskCounts, TaskStore};

use anyhow::Result;
use std::path::PathBuf;

pub const TASKS_FILE: &str = "tasks.json";

/// Directory holding taskline's data files.
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Cannot find data directory"))?;
    Ok(base.join("taskline"))
}

/// Default path of the persisted task document.
pub fn default_tasks_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(TASKS_FILE))
}
