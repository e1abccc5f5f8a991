mod config;
mod connection_source;
mod database_config;
mod env_file;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use connection_source::ConnectionSource;
pub use database_config::{DatabaseConfig, database_name_from_uri, redact_uri};
pub use env_file::read_env_file_value;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

/// Environment variable (and env-file key) holding the connection string
pub const MONGODB_URI_ENV_VAR: &str = "MONGODB_URI";
/// Env file looked up in the project directory
pub const ENV_FILE_NAME: &str = ".env.local";
/// Overrides the project directory (defaults to the current working directory)
pub const PROJECT_DIR_ENV_VAR: &str = "TRACKER_PROJECT_DIR";

pub const USERS_COLLECTION: &str = "users";

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/internship_tracker";
const DEFAULT_DATABASE_NAME: &str = "internship_tracker";
const MONGODB_SCHEMES: [&str; 2] = ["mongodb://", "mongodb+srv://"];
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
