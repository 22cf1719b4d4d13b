use crate::error::AppError;
use crate::model::TaskStatus;
use crate::storage::json_store::DEFAULT_STORE_PATH;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_ENV_VAR: &str = "TASK_TRACKER_CONFIG_PATH";
pub const STORE_ENV_VAR: &str = "TASK_TRACKER_STORE_PATH";

const RESET: &str = "\x1b[0m";

/// Colour scheme for status labels in plain listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Theme {
    #[default]
    Plain,
    Noir,
    Solarized,
}

impl Theme {
    /// Case, spacing and punctuation are ignored; unknown names fall back to
    /// [`Theme::Plain`].
    pub fn from_name(raw: &str) -> Self {
        let key: String = raw
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "noir" | "dark" | "darkmode" => Self::Noir,
            "solarized" => Self::Solarized,
            _ => Self::Plain,
        }
    }

    fn status_colour(self, status: TaskStatus) -> Option<&'static str> {
        match (self, status) {
            (Self::Plain, _) => None,
            (Self::Noir, TaskStatus::Todo) => Some("\x1b[38;5;208m"),
            (Self::Noir, TaskStatus::InProgress) => Some("\x1b[38;5;220m"),
            (Self::Noir, TaskStatus::Done) => Some("\x1b[38;5;244m"),
            (Self::Solarized, TaskStatus::Todo) => Some("\x1b[38;5;136m"),
            (Self::Solarized, TaskStatus::InProgress) => Some("\x1b[38;5;33m"),
            (Self::Solarized, TaskStatus::Done) => Some("\x1b[38;5;64m"),
        }
    }

    pub fn paint_status(self, status: TaskStatus) -> String {
        match self.status_colour(status) {
            Some(colour) => format!("{colour}{status}{RESET}"),
            None => status.to_string(),
        }
    }
}

impl From<String> for Theme {
    fn from(raw: String) -> Self {
        Self::from_name(&raw)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl Config {
    /// Reads the config file named by `TASK_TRACKER_CONFIG_PATH`, or
    /// `~/.config/task-tracker/config.json`.
    ///
    /// Never fails: an unreadable file yields defaults plus the reason.
    pub fn discover() -> (Self, Option<AppError>) {
        let Some(path) = config_file_path() else {
            return (Self::default(), None);
        };
        match Self::from_file(&path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// A missing file is an empty config.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(AppError::load(format!("{}: {}", path.display(), err))),
        };
        let config = serde_json::from_str(&content).map_err(|err| {
            AppError::load(format!("invalid config {}: {}", path.display(), err))
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Picks the backing file: explicit flag, then environment, then the
    /// config file, then [`DEFAULT_STORE_PATH`].
    pub fn resolve_store_path(&self, flag: Option<&Path>) -> PathBuf {
        let from_env = std::env::var_os(STORE_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        flag.map(Path::to_path_buf)
            .or(from_env)
            .or_else(|| self.store_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
    }

    /// The `--theme` flag wins over the file.
    pub fn resolve_theme(&self, flag: Option<&str>) -> Theme {
        flag.map(Theme::from_name)
            .or(self.theme)
            .unwrap_or_default()
    }
}

fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("task-tracker")
            .join("config.json"),
    )
}
