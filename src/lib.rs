//! Taskline library - task model, persistent store, and CLI commands

pub mod cli;
pub mod task;
