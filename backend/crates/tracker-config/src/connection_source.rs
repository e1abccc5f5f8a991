use std::fmt;
use std::path::PathBuf;

use crate::MONGODB_URI_ENV_VAR;

/// Where the connection string was found
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionSource {
    EnvFile(PathBuf),
    Environment,
    #[default]
    Default,
}

impl fmt::Display for ConnectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvFile(path) => write!(f, "env file {}", path.display()),
            Self::Environment => write!(f, "environment variable {}", MONGODB_URI_ENV_VAR),
            Self::Default => write!(f, "built-in default"),
        }
    }
}
