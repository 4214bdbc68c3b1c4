//! Cross-Platform Path Utilities
//!
//! Resolves where Prompt Feed keeps its configuration.

use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

/// Get the Prompt Feed config directory (e.g. ~/.config/prompt-feed/)
pub fn prompt_feed_dir() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("prompt-feed"))
        .ok_or_else(|| AppError::config("Could not determine config directory"))
}

/// Get the config file path (<config dir>/prompt-feed/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(prompt_feed_dir()?.join("config.json"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
