mod config;
pub mod database;

pub use config::{Config, SessionsConfig, TargetsConfig};
pub use database::Database;

use std::path::PathBuf;

/// Returns `~/.config/studyflow[-dev]/` based on STUDYFLOW_ENV, or the
/// directory named by STUDYFLOW_DATA_DIR when that is set.
///
/// Set STUDYFLOW_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("STUDYFLOW_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("STUDYFLOW_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studyflow-dev")
            } else {
                base_dir.join("studyflow")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
