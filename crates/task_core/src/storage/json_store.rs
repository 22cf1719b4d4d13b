use crate::error::AppError;
use crate::model::Task;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_STORE_PATH: &str = "data/tasks.json";

/// Reads the whole task array from `path`.
///
/// A missing file is not an error: it yields an empty list and the file is
/// created by the next [`save_tasks`].
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, AppError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::info!(
                path = %path.display(),
                "task file not found, a new one will be created"
            );
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(AppError::load(format!(
                "error reading tasks file {}: {}",
                path.display(),
                err
            )));
        }
    };

    let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|err| {
        AppError::load(format!("error parsing tasks file {}: {}", path.display(), err))
    })?;
    tracing::debug!(path = %path.display(), count = tasks.len(), "loaded tasks");

    Ok(tasks)
}

/// Overwrites `path` with the full pretty-printed task array.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|err| {
            AppError::persistence(format!("error creating {}: {}", parent.display(), err))
        })?;
    }

    let content = serde_json::to_string_pretty(tasks)
        .map_err(|err| AppError::persistence(format!("error serializing tasks: {err}")))?;
    std::fs::write(path, content).map_err(|err| {
        AppError::persistence(format!("error writing {}: {}", path.display(), err))
    })?;
    tracing::debug!(path = %path.display(), count = tasks.len(), "saved tasks");

    Ok(())
}
