//! Task store - ordered in-memory task list with JSON file persistence

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::error::StoreError;
use super::model::Task;

/// How the persisted document was brought into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No document on disk (or an empty one); starting fresh
    Fresh,
    /// Document read and parsed
    Loaded(usize),
    /// Document exists but could not be parsed; starting empty.
    /// The file on disk is left alone until the next save.
    Corrupt,
    /// Document could not be read at all (permissions etc.)
    Unreadable(String),
}

/// Result of a `complete` call that found its task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The task transitioned to completed
    Completed(Task),
    /// The task was already completed; nothing changed
    AlreadyCompleted(Task),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Ordered collection of tasks backed by a JSON document. Every mutation
/// persists the full list synchronously; the document is a plain array in
/// insertion order.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Load the store from `path`. Never fails: a missing, corrupt, or
    /// unreadable document degrades to an empty store, and the returned
    /// outcome says which case applied.
    pub fn open(path: impl Into<PathBuf>) -> (Self, LoadOutcome) {
        let path = path.into();
        let (tasks, outcome) = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => (Vec::new(), LoadOutcome::Fresh),
            Ok(content) => match serde_json::from_str::<Vec<Task>>(&content) {
                Ok(tasks) => {
                    let count = tasks.len();
                    (tasks, LoadOutcome::Loaded(count))
                }
                Err(e) => {
                    warn!("Could not parse {}: {}", path.display(), e);
                    (Vec::new(), LoadOutcome::Corrupt)
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => (Vec::new(), LoadOutcome::Fresh),
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                (Vec::new(), LoadOutcome::Unreadable(e.to_string()))
            }
        };

        // Saturating: a hand-edited document with id u64::MAX must not
        // panic the load.
        let next_id = tasks
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        (
            Self {
                path,
                tasks,
                next_id,
            },
            outcome,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Next id to assign. Monotonic for the life of the process: deleting
    /// the highest task does not free its id.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Serialize the full ordered task list over the document on disk.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.tasks)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    // In-memory state is kept even when the write fails; the next
    // successful save catches the file up.
    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("Failed to save tasks to {}: {}", self.path.display(), e);
        }
    }

    /// Append a new pending task and persist. Returns the assigned id.
    pub fn add(&mut self, description: &str) -> Result<u64, StoreError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(StoreError::EmptyDescription);
        }

        let id = self.next_id;
        self.tasks.push(Task::new(id, description));
        self.next_id = self.next_id.saturating_add(1);
        self.persist();
        Ok(id)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskCounts {
            total: self.tasks.len(),
            pending: self.tasks.len() - completed,
            completed,
        }
    }

    /// Split into (pending, completed), each keeping insertion order.
    pub fn partition(&self) -> (Vec<&Task>, Vec<&Task>) {
        self.tasks.iter().partition(|t| !t.completed)
    }

    /// Mark a task as completed and persist. Completing an already-completed
    /// task is a no-op reported as `AlreadyCompleted`, not an error.
    pub fn complete(&mut self, id: u64) -> Result<Completion, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;

        if task.completed {
            return Ok(Completion::AlreadyCompleted(task.clone()));
        }

        task.complete();
        let completed = task.clone();
        self.persist();
        Ok(Completion::Completed(completed))
    }

    /// Remove a task and persist. Remaining tasks keep their order; the
    /// removed id is never reassigned.
    pub fn delete(&mut self, id: u64) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;

        let removed = self.tasks.remove(idx);
        self.persist();
        Ok(removed)
    }
}
