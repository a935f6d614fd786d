//! CLI command implementations

pub mod database;
pub mod stats;

use crate::config::AppConfig;
use crate::errors::AppResult;
use std::path::PathBuf;

/// Get database path from CLI argument or config, creating its parent directory
pub(crate) fn resolve_database_path(
    cli_path: &Option<PathBuf>,
    app_config: &AppConfig,
) -> AppResult<String> {
    let path = cli_path
        .clone()
        .unwrap_or_else(|| app_config.database.default_path.clone());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(path.to_string_lossy().to_string())
}

/// Write output to file with safe directory creation
pub(crate) fn write_output_to_file(path: &PathBuf, content: &str, description: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    println!("{} written to: {}", description, path.display());
    Ok(())
}
