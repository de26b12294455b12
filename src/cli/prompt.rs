//! Interactive prompt - the default mode when no subcommand is given
//!
//! Reads commands line by line (`add`, `list`, `complete <id>`,
//! `delete <id>`, `help`, `quit`). Errors are rendered and the loop
//! continues; only EOF or `quit` ends the session.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::task::{self, Completion, LoadOutcome, TaskStore};

use super::style::Theme;

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run(file: Option<&Path>) -> Result<()> {
    let theme = Theme::detect();

    println!("{}", theme.title("Welcome to Taskline!"));

    let path = match file {
        Some(p) => p.to_path_buf(),
        None => task::default_tasks_path()?,
    };
    let (mut store, outcome) = TaskStore::open(path);

    match &outcome {
        LoadOutcome::Fresh => {
            println!("{}", theme.note("Starting with a new task list."));
        }
        LoadOutcome::Loaded(count) => {
            println!(
                "{}",
                theme.ok(&format!(
                    "✓ Loaded {} task(s) from {}",
                    count,
                    store.path().display()
                ))
            );
        }
        degraded => super::render_load_outcome(degraded, &store, &theme),
    }

    print_help(&theme);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("{}", theme.note("Enter command: "));
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match dispatch(&mut store, line, &theme, &mut input) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                println!(
                    "{}",
                    theme.err(&format!("✗ An unexpected error occurred: {}", e))
                );
            }
        }
    }

    println!("{}", theme.ok("Goodbye!"));
    Ok(())
}

/// Execute one prompt line against the store.
fn dispatch(
    store: &mut TaskStore,
    line: &str,
    theme: &Theme,
    input: &mut impl BufRead,
) -> Result<Flow> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("").to_lowercase();
    let rest: Vec<&str> = parts.collect();

    match command.as_str() {
        "quit" | "exit" => return Ok(Flow::Quit),
        "help" | "menu" => print_help(theme),
        "add" => {
            let description = if rest.is_empty() {
                read_description(theme, input)?
            } else {
                rest.join(" ")
            };
            match store.add(&description) {
                Ok(id) => println!(
                    "{}",
                    theme.ok(&format!(
                        "✓ Task added with ID {}: {}",
                        id,
                        description.trim()
                    ))
                ),
                Err(e) => println!("{}", theme.err(&format!("✗ Error: {}", e))),
            }
        }
        "list" => super::list::render(store, theme),
        "complete" => {
            if let Some(id) = single_id(&rest, "complete", theme) {
                run_complete(store, id, theme);
            }
        }
        "delete" => {
            if let Some(id) = single_id(&rest, "delete", theme) {
                run_delete(store, id, theme);
            }
        }
        other => {
            println!("{}", theme.err(&format!("✗ Unknown command: '{}'", other)));
            println!("{}", theme.warn("Type 'help' to see available commands"));
        }
    }

    Ok(Flow::Continue)
}

fn run_complete(store: &mut TaskStore, id: u64, theme: &Theme) {
    match store.complete(id) {
        Ok(Completion::Completed(task)) => println!(
            "{}",
            theme.ok(&format!(
                "✓ Task {} marked as completed: {}",
                task.id, task.description
            ))
        ),
        Ok(Completion::AlreadyCompleted(task)) => println!(
            "{}",
            theme.warn(&format!("⚠ Task {} is already completed", task.id))
        ),
        Err(e) => println!("{}", theme.err(&format!("✗ Error: {}", e))),
    }
}

fn run_delete(store: &mut TaskStore, id: u64, theme: &Theme) {
    match store.delete(id) {
        Ok(task) => println!(
            "{}",
            theme.ok(&format!("✓ Task {} deleted: {}", task.id, task.description))
        ),
        Err(e) => println!("{}", theme.err(&format!("✗ Error: {}", e))),
    }
}

/// Extract the single `<id>` argument, rendering usage or parse errors.
fn single_id(rest: &[&str], command: &str, theme: &Theme) -> Option<u64> {
    if rest.len() != 1 {
        println!(
            "{}",
            theme.err(&format!("✗ Error: Usage: {} <id>", command))
        );
        return None;
    }
    match super::parse_id(rest[0]) {
        Ok(id) => Some(id),
        Err(_) => {
            println!(
                "{}",
                theme.err("✗ Error: Invalid task ID. Please provide a number.")
            );
            None
        }
    }
}

fn read_description(theme: &Theme, input: &mut impl BufRead) -> Result<String> {
    print!("{}", theme.note("Enter task description: "));
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_help(theme: &Theme) {
    println!();
    println!("{}", theme.note("Available Commands:"));
    println!("  add [description] - Add a new task");
    println!("  list              - List all tasks");
    println!("  complete <id>     - Mark a task as completed");
    println!("  delete <id>       - Delete a task");
    println!("  help              - Show this menu");
    println!("  quit              - Exit the application");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn scratch_store(dir: &tempfile::TempDir) -> TaskStore {
        let (store, _) = TaskStore::open(dir.path().join("tasks.json"));
        store
    }

    fn run_line(store: &mut TaskStore, line: &str) -> Flow {
        let theme = Theme::new(false);
        let mut input = Cursor::new(Vec::new());
        dispatch(store, line, &theme, &mut input).unwrap()
    }

    #[test]
    fn test_quit_ends_loop() {
        let dir = tempdir().unwrap();
        let mut store = scratch_store(&dir);
        assert_eq!(run_line(&mut store, "quit"), Flow::Quit);
        assert_eq!(run_line(&mut store, "exit"), Flow::Quit);
    }

    #[test]
    fn test_add_with_inline_description() {
        let dir = tempdir().unwrap();
        let mut store = scratch_store(&dir);

        assert_eq!(run_line(&mut store, "add buy milk"), Flow::Continue);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].description, "buy milk");
    }

    #[test]
    fn test_add_prompts_for_description_when_bare() {
        let dir = tempdir().unwrap();
        let mut store = scratch_store(&dir);

        let theme = Theme::new(false);
        let mut input = Cursor::new(b"write report\n".to_vec());
        let flow = dispatch(&mut store, "add", &theme, &mut input).unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].description, "write report");
    }

    #[test]
    fn test_complete_line_marks_task() {
        let dir = tempdir().unwrap();
        let mut store = scratch_store(&dir);
        store.add("buy milk").unwrap();

        assert_eq!(run_line(&mut store, "complete 1"), Flow::Continue);
        assert!(store.tasks()[0].completed);
    }

    #[test]
    fn test_delete_line_removes_task() {
        let dir = tempdir().unwrap();
        let mut store = scratch_store(&dir);
        store.add("buy milk").unwrap();

        assert_eq!(run_line(&mut store, "delete 1"), Flow::Continue);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_malformed_id_keeps_loop_alive() {
        let dir = tempdir().unwrap();
        let mut store = scratch_store(&dir);
        store.add("buy milk").unwrap();

        assert_eq!(run_line(&mut store, "complete abc"), Flow::Continue);
        assert_eq!(run_line(&mut store, "complete"), Flow::Continue);
        assert_eq!(run_line(&mut store, "delete 1 2"), Flow::Continue);
        assert!(!store.tasks()[0].completed);
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_unknown_command_keeps_loop_alive() {
        let dir = tempdir().unwrap();
        let mut store = scratch_store(&dir);
        assert_eq!(run_line(&mut store, "frobnicate"), Flow::Continue);
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let dir = tempdir().unwrap();
        let mut store = scratch_store(&dir);
        assert_eq!(run_line(&mut store, "QUIT"), Flow::Quit);
        assert_eq!(run_line(&mut store, "Add buy milk"), Flow::Continue);
        assert_eq!(store.tasks().len(), 1);
    }
}
