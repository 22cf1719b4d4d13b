use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use task_cli::cli::{Cli, Command, join_words};
use task_cli::output;
use task_core::config::{Config, Theme};
use task_core::error::AppError;
use task_core::manager::TaskManager;
use task_core::model::Task;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_ENV_VAR: &str = "TASK_TRACKER_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn normalize_parse_error(err: &clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::validation(message)
}

fn print_task(task: &Task, json: bool, message: &str) -> Result<(), AppError> {
    if json {
        println!("{}", output::to_json(task)?);
    } else {
        println!("{message}");
    }
    Ok(())
}

fn run_command(cli: Cli, manager: &mut TaskManager, theme: Theme) -> Result<(), AppError> {
    match cli.command {
        Command::Add { description } => {
            let task = manager.add_task(&join_words(&description))?;
            let message = format!("Task added successfully (ID: {})", task.id);
            print_task(&task, cli.json, &message)?;
        }
        Command::Update { id, description } => {
            let task = manager.update_task(id, &join_words(&description))?;
            print_task(&task, cli.json, "Task updated successfully")?;
        }
        Command::Delete { id } => {
            let task = manager.delete_task(id)?;
            print_task(&task, cli.json, "Task deleted successfully")?;
        }
        Command::MarkInProgress { id } => {
            let task = manager.mark_task_in_progress(id)?;
            print_task(&task, cli.json, "Task marked as in progress successfully")?;
        }
        Command::MarkDone { id } => {
            let task = manager.mark_task_done(id)?;
            print_task(&task, cli.json, "Task marked as done successfully")?;
        }
        Command::List { status, table } => {
            let tasks: Vec<&Task> = match status {
                Some(status) => manager.list_filter_by_status(status.as_str()),
                None => manager.list_tasks().iter().collect(),
            };

            if cli.json {
                println!("{}", output::to_json(&tasks)?);
            } else if tasks.is_empty() {
                println!(
                    "{}",
                    output::empty_listing(status, manager.list_tasks().len())
                );
            } else if table {
                println!("{}", output::task_table(&tasks));
            } else {
                for task in tasks {
                    println!("{}", output::task_line(task, theme));
                }
            }
        }
    }

    Ok(())
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) if err.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            eprint!("{err}");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(&err));
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    };

    let (config, config_error) = Config::discover();
    if let Some(err) = config_error.as_ref() {
        tracing::warn!(error = %err, "ignoring configuration file");
    }

    let store_path = config.resolve_store_path(cli.file.as_deref());
    let mut manager = match TaskManager::new(&store_path) {
        Ok(manager) => manager,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
    };

    let theme = config.resolve_theme(cli.theme.as_deref());

    if let Err(err) = run_command(cli, &mut manager, theme) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
