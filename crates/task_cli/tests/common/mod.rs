#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("task-tracker-{nanos}-{file_name}"))
}

/// The binary with a clean environment: no store override, no config file,
/// no log filter.
pub fn command(args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_task-tracker"));
    command
        .args(args)
        .env_remove("TASK_TRACKER_STORE_PATH")
        .env("TASK_TRACKER_CONFIG_PATH", temp_path("no-config.json"))
        .env_remove("TASK_TRACKER_LOG")
        .env_remove("RUST_LOG");
    command
}

pub fn run(store_path: &Path, args: &[&str]) -> Output {
    command(args)
        .env("TASK_TRACKER_STORE_PATH", store_path)
        .output()
        .expect("failed to run task-tracker")
}

pub fn write_config(path: &Path, config: serde_json::Value) {
    std::fs::write(path, serde_json::to_string(&config).unwrap()).unwrap();
}

pub fn write_store(path: &Path, tasks: serde_json::Value) {
    std::fs::write(path, serde_json::to_string_pretty(&tasks).unwrap()).unwrap();
}

pub fn read_store(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
