use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("path_resolution - {0}")]
    PathResolution(String),
    #[error("load_error - {0}")]
    Load(String),
    #[error("persistence_error - {0}")]
    Persistence(String),
    #[error("validation_error - {0}")]
    Validation(String),
    #[error("not_found - {0}")]
    NotFound(String),
}

impl AppError {
    pub fn path_resolution<M: Into<String>>(message: M) -> Self {
        Self::PathResolution(message.into())
    }

    pub fn load<M: Into<String>>(message: M) -> Self {
        Self::Load(message.into())
    }

    pub fn persistence<M: Into<String>>(message: M) -> Self {
        Self::Persistence(message.into())
    }

    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<M: Into<String>>(message: M) -> Self {
        Self::NotFound(message.into())
    }

    pub fn task_not_found(id: u64) -> Self {
        Self::not_found(format!("task with ID {id} not found"))
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::PathResolution(_) => "path_resolution",
            Self::Load(_) => "load_error",
            Self::Persistence(_) => "persistence_error",
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::PathResolution(message)
            | Self::Load(message)
            | Self::Persistence(message)
            | Self::Validation(message)
            | Self::NotFound(message) => message,
        }
    }
}
