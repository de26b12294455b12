//! Taskline - personal task tracker for the terminal

use anyhow::Result;
use clap::Parser;
use taskline::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TASKLINE_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskline=debug")
            .init();
    }

    let cli = Cli::parse();
    let file = cli.file.as_deref();

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(file, args),
        Some(Commands::List(args)) => cli::list::run(file, args),
        Some(Commands::Complete(args)) => cli::complete::run(file, args),
        Some(Commands::Delete(args)) => cli::delete::run(file, args),
        None => cli::prompt::run(file),
    }
}
