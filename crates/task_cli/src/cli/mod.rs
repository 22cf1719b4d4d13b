use clap::{Parser, Subcommand};
use std::path::PathBuf;
use task_core::model::TaskStatus;

#[derive(Parser, Debug)]
#[command(name = "task-tracker", author, version, about = "Track short tasks in a local JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task file to use instead of the configured one
    #[arg(long, value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// Colour theme for plain output (plain, noir, solarized)
    #[arg(long, value_name = "THEME", global = true)]
    pub theme: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: task-tracker add Buy milk
    Add { description: Vec<String> },
    /// Change a task's description
    ///
    /// Example: task-tracker update 1 Buy organic milk
    Update {
        id: u64,
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Delete a task
    ///
    /// Example: task-tracker delete 1
    Delete { id: u64 },
    /// List tasks, optionally only those with the given status
    ///
    /// Example: task-tracker list
    /// Example: task-tracker list in-progress
    List {
        #[arg(value_parser = parse_status, value_name = "STATUS")]
        status: Option<TaskStatus>,
        /// Render a table with timestamps
        #[arg(long)]
        table: bool,
    },
    /// Mark a task as in progress
    ///
    /// Example: task-tracker mark-in-progress 1
    MarkInProgress { id: u64 },
    /// Mark a task as done
    ///
    /// Example: task-tracker mark-done 1
    MarkDone { id: u64 },
}

fn parse_status(raw: &str) -> Result<TaskStatus, String> {
    raw.parse::<TaskStatus>()
        .map_err(|err| err.message().to_string())
}

/// Joins the free-form words of `add`/`update` into one description.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, join_words};
    use clap::Parser;
    use clap::error::ErrorKind;
    use task_core::model::TaskStatus;

    #[test]
    fn update_collects_remaining_words() {
        let cli =
            Cli::try_parse_from(["task-tracker", "update", "3", "buy", "oat", "milk"]).unwrap();

        match cli.command {
            Command::Update { id, description } => {
                assert_eq!(id, 3);
                assert_eq!(join_words(&description), "buy oat milk");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn update_requires_description() {
        let err = Cli::try_parse_from(["task-tracker", "update", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn mark_commands_use_kebab_case_names() {
        let cli = Cli::try_parse_from(["task-tracker", "mark-in-progress", "2"]).unwrap();
        assert!(matches!(cli.command, Command::MarkInProgress { id: 2 }));

        let cli = Cli::try_parse_from(["task-tracker", "mark-done", "5"]).unwrap();
        assert!(matches!(cli.command, Command::MarkDone { id: 5 }));
    }

    #[test]
    fn rejects_non_numeric_id() {
        let err = Cli::try_parse_from(["task-tracker", "delete", "one"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn list_parses_status_filter() {
        let cli = Cli::try_parse_from(["task-tracker", "list", "in-progress", "--table"]).unwrap();

        match cli.command {
            Command::List { status, table } => {
                assert_eq!(status, Some(TaskStatus::InProgress));
                assert!(table);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_rejects_unknown_status() {
        let err = Cli::try_parse_from(["task-tracker", "list", "archived"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Valid inputs are: todo, done, in-progress"));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli =
            Cli::try_parse_from(["task-tracker", "list", "--json", "--file", "t.json"]).unwrap();

        assert!(cli.json);
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("t.json")));
    }

    #[test]
    fn add_accepts_no_words() {
        let cli = Cli::try_parse_from(["task-tracker", "add"]).unwrap();

        match cli.command {
            Command::Add { description } => assert_eq!(join_words(&description), ""),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
