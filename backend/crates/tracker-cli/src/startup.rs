use crate::{AdminError, AdminResult, logger};

use tracker_config::Config;

use std::path::PathBuf;

/// Load and validate configuration, then start logging.
///
/// Shared by both binaries; runs before any database access.
pub fn load_config() -> AdminResult<Config> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = match config.logging.file {
        Some(ref file) => Some(resolve_log_file(file)?),
        None => None,
    };

    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    Ok(config)
}

/// Relative log paths are taken from the project directory, whose parent
/// directories are created on demand.
fn resolve_log_file(file: &str) -> AdminResult<PathBuf> {
    let path = PathBuf::from(file);
    let path = if path.is_absolute() {
        path
    } else {
        Config::project_dir()?.join(path)
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AdminError::logger(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    Ok(path)
}
