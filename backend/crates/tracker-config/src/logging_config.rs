use crate::{DEFAULT_LOG_COLORED, LogLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored level names on a terminal; ignored when logging to a file
    pub colored: bool,
    /// Log file path. `None` logs to stderr.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}
