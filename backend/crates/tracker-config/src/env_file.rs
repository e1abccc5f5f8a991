use crate::{ConfigError, ConfigErrorResult};

use std::path::Path;

use log::{debug, warn};

/// Look up `key` in a dotenv-style file.
///
/// The first entry with a matching key wins and its value is trimmed.
/// A missing file yields `Ok(None)`.
///
/// Lines follow dotenv syntax rather than plain `KEY=rest of line`:
/// `$VAR` and `${VAR}` are substituted from the environment (unset names
/// become empty), backslash escapes are processed, and ` #` starts a comment.
/// Single-quote a value to keep it literal. Lines that cannot be parsed are
/// skipped, with a warning when the skipped line sets `key`.
pub fn read_env_file_value(path: &Path, key: &str) -> ConfigErrorResult<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let entries = dotenvy::from_path_iter(path)
        .map_err(|e| ConfigError::from_env_file(path.to_path_buf(), e))?;

    for entry in entries {
        match entry {
            Ok((name, value)) if name == key => return Ok(Some(value.trim().to_string())),
            Ok(_) => {}
            Err(dotenvy::Error::Io(source)) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Err(dotenvy::Error::LineParse(line, _)) if sets_key(&line, key) => {
                warn!(
                    "Ignoring {} in {}: the line could not be parsed",
                    key,
                    path.display()
                );
            }
            Err(e) => debug!("Skipping unparseable line in {}: {}", path.display(), e),
        }
    }

    Ok(None)
}

pub(crate) fn sets_key(line: &str, key: &str) -> bool {
    let line = line.trim_start();
    let line = line.strip_prefix("export ").unwrap_or(line).trim_start();
    line.strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}
