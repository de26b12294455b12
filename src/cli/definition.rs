//! Command-line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::{add::AddArgs, complete::CompleteArgs, delete::DeleteArgs, list::ListArgs};

#[derive(Parser)]
#[command(
    name = "taskline",
    about = "Personal task tracker for the terminal",
    version
)]
pub struct Cli {
    /// Tasks file to use (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Run in interactive mode when no command is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),
    /// List all tasks
    List(ListArgs),
    /// Mark a task as completed
    Complete(CompleteArgs),
    /// Delete a task
    Delete(DeleteArgs),
}
