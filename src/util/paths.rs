//! Path utilities for the transfer-desk data directory

use std::path::PathBuf;
use std::sync::OnceLock;

/// Global storage for custom data directory path
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Must be called early in main() before any other path functions are used.
/// If custom_path is None, uses the default ~/.transfer-desk location.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        let existing = DATA_DIR
            .get()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::debug!(
            path = %path.display(),
            existing = %existing,
            "Data directory already initialized"
        );
    }
}

/// Get the default data directory path (~/.transfer-desk)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".transfer-desk"))
        .unwrap_or_else(|| PathBuf::from(".transfer-desk"))
}

/// Get the base data directory.
/// Returns the custom path if set via init_data_dir(), otherwise ~/.transfer-desk
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the logs directory (~/.transfer-desk/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the default log file path (~/.transfer-desk/logs/transfer-desk.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("transfer-desk.log")
}

/// Get the config file path (~/.transfer-desk/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
