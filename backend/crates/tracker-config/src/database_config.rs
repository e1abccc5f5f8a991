use crate::{
    ConnectionSource, DEFAULT_DATABASE_NAME, DEFAULT_MONGODB_URI, MONGODB_SCHEMES,
    USERS_COLLECTION,
};

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub source: ConnectionSource,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: String::from(DEFAULT_MONGODB_URI),
            source: ConnectionSource::Default,
        }
    }
}

impl DatabaseConfig {
    /// Pick the connection string: env file entry, then environment variable,
    /// then the built-in default. Performs no I/O.
    pub fn resolve(env_file: Option<(String, PathBuf)>, environment: Option<String>) -> Self {
        if let Some((uri, path)) = env_file {
            return Self {
                uri,
                source: ConnectionSource::EnvFile(path),
            };
        }

        if let Some(uri) = environment {
            return Self {
                uri,
                source: ConnectionSource::Environment,
            };
        }

        Self::default()
    }

    pub fn database_name(&self) -> String {
        database_name_from_uri(&self.uri)
    }

    pub fn collection_name(&self) -> &'static str {
        USERS_COLLECTION
    }

    pub fn redacted_uri(&self) -> String {
        redact_uri(&self.uri)
    }
}

/// Database name from the path segment of a `mongodb://` or `mongodb+srv://`
/// URI, falling back to the default when there is none.
pub fn database_name_from_uri(uri: &str) -> String {
    let Some(rest) = strip_scheme(uri).map(|(_, rest)| rest) else {
        return String::from(DEFAULT_DATABASE_NAME);
    };

    let name = match rest.find(|c: char| c == '/' || c == '?') {
        Some(idx) if rest[idx..].starts_with('/') => rest[idx + 1..]
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default(),
        _ => "",
    };

    if name.is_empty() {
        String::from(DEFAULT_DATABASE_NAME)
    } else {
        name.to_string()
    }
}

/// Replace the password in a connection string with `****`.
pub fn redact_uri(uri: &str) -> String {
    let Some((scheme, rest)) = strip_scheme(uri) else {
        return uri.to_string();
    };

    let authority_end = rest.find(|c: char| c == '/' || c == '?').unwrap_or(rest.len());
    let (authority, remainder) = rest.split_at(authority_end);

    match authority.rsplit_once('@') {
        Some((userinfo, hosts)) => {
            let user = match userinfo.split_once(':') {
                Some((user, _password)) => format!("{}:****", user),
                None => userinfo.to_string(),
            };
            format!("{}{}@{}{}", scheme, user, hosts, remainder)
        }
        None => uri.to_string(),
    }
}

fn strip_scheme(uri: &str) -> Option<(&'static str, &str)> {
    MONGODB_SCHEMES
        .iter()
        .find_map(|scheme| uri.strip_prefix(scheme).map(|rest| (*scheme, rest)))
}
