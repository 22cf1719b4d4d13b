use crate::error::AppError;
use crate::model::{Task, TaskStatus};
use crate::storage::json_store;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

/// Owns the in-memory task list and its backing JSON file.
///
/// Every mutation rewrites the whole file. Persistence is best effort: when a
/// save fails the error is returned but the in-memory change is kept. There is
/// no locking, so two processes writing the same file race and the last
/// writer wins.
#[derive(Debug)]
pub struct TaskManager {
    file_path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskManager {
    /// Resolves `file_path` to an absolute path and loads it.
    pub fn new<P: AsRef<Path>>(file_path: P) -> Result<Self, AppError> {
        let file_path = resolve_path(file_path.as_ref())?;
        let mut manager = Self {
            file_path,
            tasks: Vec::new(),
            next_id: 1,
        };
        manager.load()?;
        Ok(manager)
    }

    /// Replaces the in-memory state with the file contents.
    ///
    /// `next_id` follows the last task in file order, not the largest id.
    pub fn load(&mut self) -> Result<(), AppError> {
        let tasks = json_store::load_tasks(&self.file_path)?;
        let next_id = match tasks.last() {
            Some(last) => last.id.checked_add(1).ok_or_else(|| {
                AppError::load(format!(
                    "task ID {} in {} leaves no room for new IDs",
                    last.id,
                    self.file_path.display()
                ))
            })?,
            None => 1,
        };
        self.tasks = tasks;
        self.next_id = next_id;
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        json_store::save_tasks(&self.file_path, &self.tasks)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Stores `description` as given; only the emptiness check ignores
    /// surrounding whitespace.
    pub fn add_task(&mut self, description: &str) -> Result<Task, AppError> {
        if description.trim().is_empty() {
            return Err(AppError::validation("description cannot be empty"));
        }
        let following = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| AppError::validation("no task IDs left to assign"))?;

        let task = Task::new(self.next_id, description.to_string(), now());
        self.tasks.push(task.clone());
        self.next_id = following;
        tracing::info!(id = task.id, "task added");

        self.persist()?;
        Ok(task)
    }

    pub fn find_task(&self, id: u64) -> Result<&Task, AppError> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or_else(|| AppError::task_not_found(id))
    }

    /// A blank `new_description` leaves the task untouched but still saves.
    pub fn update_task(&mut self, id: u64, new_description: &str) -> Result<Task, AppError> {
        let task = self.find_task_mut(id)?;
        if !new_description.trim().is_empty() {
            task.description = new_description.to_string();
            task.touch(now());
        }
        let updated = task.clone();
        tracing::info!(id, "task updated");

        self.persist()?;
        Ok(updated)
    }

    pub fn delete_task(&mut self, id: u64) -> Result<Task, AppError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| AppError::task_not_found(id))?;
        let removed = self.tasks.remove(index);
        tracing::info!(id, "task deleted");

        self.persist()?;
        Ok(removed)
    }

    pub fn mark_task_in_progress(&mut self, id: u64) -> Result<Task, AppError> {
        self.set_status(id, TaskStatus::InProgress)
    }

    pub fn mark_task_done(&mut self, id: u64) -> Result<Task, AppError> {
        self.set_status(id, TaskStatus::Done)
    }

    pub fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks whose status label equals `status`, in list order.
    ///
    /// Unknown labels simply match nothing.
    pub fn list_filter_by_status(&self, status: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.status.as_str() == status)
            .collect()
    }

    fn set_status(&mut self, id: u64, status: TaskStatus) -> Result<Task, AppError> {
        let task = self.find_task_mut(id)?;
        task.status = status;
        task.touch(now());
        let updated = task.clone();
        tracing::info!(id, %status, "task status changed");

        self.persist()?;
        Ok(updated)
    }

    fn find_task_mut(&mut self, id: u64) -> Result<&mut Task, AppError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| AppError::task_not_found(id))
    }

    fn persist(&self) -> Result<(), AppError> {
        self.save().inspect_err(|err| {
            tracing::warn!(
                path = %self.file_path.display(),
                error = %err,
                "save failed, in-memory change kept"
            );
        })
    }
}

fn resolve_path(path: &Path) -> Result<PathBuf, AppError> {
    std::path::absolute(path).map_err(|err| {
        AppError::path_resolution(format!(
            "error getting absolute path for '{}': {}",
            path.display(),
            err
        ))
    })
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
