pub mod config;
pub mod error;
pub mod manager;
pub mod model;
pub mod storage;

pub use error::AppError;
pub use manager::TaskManager;
pub use model::{Task, TaskStatus};
