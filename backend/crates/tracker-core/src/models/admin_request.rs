//! Validated inputs for the admin tools.
//!
//! Constructors normalize the identity and email to lower case so that the
//! rest of the system only ever sees the stored form. Beyond rejecting empty
//! values nothing is validated: any non-empty string is an acceptable
//! username, name or email.

use crate::{CoreError, DEFAULT_GITLAB_ID_PREFIX, ProfileUpdate, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAdminRequest {
    pub gitlab_username: String,
    pub name: String,
    pub email: String,
    pub gitlab_id: Option<String>,
}

impl CreateAdminRequest {
    #[track_caller]
    pub fn new(
        gitlab_username: &str,
        name: &str,
        email: &str,
        gitlab_id: Option<&str>,
    ) -> CoreErrorResult<Self> {
        require_non_empty("gitlab_username", gitlab_username)?;
        require_non_empty("name", name)?;
        require_non_empty("email", email)?;

        Ok(Self {
            gitlab_username: gitlab_username.to_lowercase(),
            name: name.to_string(),
            email: email.to_lowercase(),
            gitlab_id: gitlab_id.filter(|id| !id.is_empty()).map(str::to_string),
        })
    }

    /// The supplied GitLab id, or `admin_<username>` when none was given
    pub fn effective_gitlab_id(&self) -> String {
        match &self.gitlab_id {
            Some(id) => id.clone(),
            None => format!("{}{}", DEFAULT_GITLAB_ID_PREFIX, self.gitlab_username),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAdminRequest {
    pub gitlab_username: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateAdminRequest {
    /// Empty optional values are treated as absent; at least one of
    /// `name` and `email` must remain.
    #[track_caller]
    pub fn new(
        gitlab_username: &str,
        name: Option<&str>,
        email: Option<&str>,
    ) -> CoreErrorResult<Self> {
        require_non_empty("gitlab_username", gitlab_username)?;

        let name = name.filter(|n| !n.is_empty()).map(str::to_string);
        let email = email.filter(|e| !e.is_empty()).map(str::to_lowercase);

        if name.is_none() && email.is_none() {
            return Err(CoreError::Validation {
                message: "at least one field to update is required (--email or --name)"
                    .to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            gitlab_username: gitlab_username.to_lowercase(),
            name,
            email,
        })
    }

    pub fn to_profile_update(&self, now: DateTime<Utc>) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.clone(),
            email: self.email.clone(),
            updated_at: now,
        }
    }
}

#[track_caller]
fn require_non_empty(field: &str, value: &str) -> CoreErrorResult<()> {
    if value.is_empty() {
        return Err(CoreError::Validation {
            message: format!("{} must not be empty", field),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
