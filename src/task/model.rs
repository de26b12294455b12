//! Task data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single tracked to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, assigned monotonically by the store
    pub id: u64,

    /// What needs doing
    pub description: String,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new pending task. The description is stored as given;
    /// the store trims before calling this.
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Mark the task as done and stamp the completion time.
    pub fn complete(&mut self) {
        self.completed = true;
        self.completed_at = Some(Utc::now());
    }
}
