use crate::{
    ConfigError, ConfigErrorResult, DatabaseConfig, ENV_FILE_NAME, LoggingConfig,
    MONGODB_URI_ENV_VAR, PROJECT_DIR_ENV_VAR, read_env_file_value,
};

use std::path::PathBuf;

use log::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the process environment.
    ///
    /// Loading order for the connection string:
    /// 1. First `MONGODB_URI` entry in `<project dir>/.env.local`
    /// 2. `MONGODB_URI` environment variable
    /// 3. Built-in default
    ///
    /// Logging settings start from defaults and take `TRACKER_LOG_*` overrides.
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let env_file = Self::env_file_path()?;
        let file_uri = read_env_file_value(&env_file, MONGODB_URI_ENV_VAR)?;
        let env_uri = std::env::var(MONGODB_URI_ENV_VAR).ok();

        let mut config = Config {
            database: DatabaseConfig::resolve(file_uri.map(|uri| (uri, env_file)), env_uri),
            logging: LoggingConfig::default(),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Get the project directory.
    /// Priority: TRACKER_PROJECT_DIR env var > current working directory
    pub fn project_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(PROJECT_DIR_ENV_VAR) {
            return Ok(PathBuf::from(dir));
        }

        std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))
    }

    pub fn env_file_path() -> ConfigErrorResult<PathBuf> {
        Ok(Self::project_dir()?.join(ENV_FILE_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch errors before touching the database.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.database.uri.trim().is_empty() {
            return Err(ConfigError::database(format!(
                "connection string from {} is empty",
                self.database.source
            )));
        }

        if let Some(ref file) = self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging file path cannot be empty"));
        }

        Ok(())
    }

    /// Log configuration summary (NEVER logs credentials).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  database: {} (from {})",
            self.database.redacted_uri(),
            self.database.source
        );
        info!(
            "  target: {}.{}",
            self.database.database_name(),
            self.database.collection_name()
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        Self::apply_env_parse("TRACKER_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TRACKER_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TRACKER_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
