use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Invalid input: {0}")]
    Input(#[from] tracker_core::CoreError),

    #[error("Config error: {0}")]
    Config(#[from] tracker_config::ConfigError),

    #[error("Database error: {0}")]
    Store(#[from] tracker_db::DbError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

/// Machine-readable classification of an [`AdminError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    InvalidInput,
    Configuration,
    Store,
    Logging,
}

impl AdminError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        AdminError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn reason(&self) -> FailureReason {
        match self {
            AdminError::Input(_) => FailureReason::InvalidInput,
            AdminError::Config(_) => FailureReason::Configuration,
            AdminError::Store(_) => FailureReason::Store,
            AdminError::Logger { .. } => FailureReason::Logging,
        }
    }
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Configuration => "configuration",
            Self::Store => "store",
            Self::Logging => "logging",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
