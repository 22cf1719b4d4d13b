use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use task_core::config::Theme;
use task_core::error::AppError;
use task_core::model::{Task, TaskStatus};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Created")]
    created_at: String,
    #[tabled(rename = "Updated")]
    updated_at: String,
}

fn timestamp(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_else(|_| at.to_string())
}

pub fn task_line(task: &Task, theme: Theme) -> String {
    format!(
        "ID: {}, Description: {}, Status: {}",
        task.id,
        task.description,
        theme.paint_status(task.status)
    )
}

pub fn task_table(tasks: &[&Task]) -> String {
    let rows = tasks.iter().map(|task| TaskRow {
        id: task.id,
        description: task.description.clone(),
        status: task.status.as_str(),
        created_at: timestamp(task.created_at),
        updated_at: timestamp(task.updated_at),
    });
    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value)
        .map_err(|err| AppError::validation(format!("cannot encode output as JSON: {err}")))
}

/// Message for a listing with no rows to show.
pub fn empty_listing(filter: Option<TaskStatus>, total: usize) -> String {
    match filter {
        Some(status) if total > 0 => format!("No tasks found with status '{status}'."),
        _ => "No tasks found.".to_string(),
    }
}
