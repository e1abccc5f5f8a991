
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp project directory with TRACKER_PROJECT_DIR pointing at it and
/// MONGODB_URI cleared, so only what the test sets is visible.
pub(crate) fn setup_project_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set(crate::PROJECT_DIR_ENV_VAR, temp.path().to_str().unwrap()),
        EnvGuard::remove(crate::MONGODB_URI_ENV_VAR),
        EnvGuard::remove("TRACKER_LOG_LEVEL"),
        EnvGuard::remove("TRACKER_LOG_COLORED"),
        EnvGuard::remove("TRACKER_LOG_FILE"),
    ];
    (temp, guards)
}
