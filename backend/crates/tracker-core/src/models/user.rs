//! User record - one document in the application's `users` collection.

use crate::{BOOTSTRAP_ASSIGNED_BY, CreateAdminRequest, UserRole};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Hex ObjectId; `None` until the record has been persisted
    pub id: Option<String>,
    /// GitLab username, lower-cased. Natural key of the collection.
    pub gitlab_username: String,
    pub gitlab_id: String,
    pub name: String,
    /// Lower-cased
    pub email: String,
    pub role: UserRole,
    pub assigned_by: String,
    pub is_active: bool,
    pub profile_image: Option<String>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build the admin record the bootstrap tool inserts.
    ///
    /// Both timestamps are set to `now`. The request is already normalized,
    /// so the identity and email are stored exactly as they appear in it.
    pub fn bootstrap_admin(request: &CreateAdminRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            gitlab_username: request.gitlab_username.clone(),
            gitlab_id: request.effective_gitlab_id(),
            name: request.name.clone(),
            email: request.email.clone(),
            role: UserRole::Admin,
            assigned_by: String::from(BOOTSTRAP_ASSIGNED_BY),
            is_active: true,
            profile_image: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}
