//! BSON shape of a user record as the web application stores it.

use crate::{DbError, Result as DbErrorResult};

use tracker_core::{User, UserRole};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

pub(crate) const GITLAB_USERNAME_FIELD: &str = "gitlabUsername";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub gitlab_username: String,
    #[serde(default)]
    pub gitlab_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub assigned_by: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub last_login_at: Option<bson::DateTime>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

fn default_is_active() -> bool {
    true
}

impl UserDocument {
    /// Build the document for `user`, stored under `id`.
    pub(crate) fn from_user(user: &User, id: ObjectId) -> Self {
        Self {
            id,
            gitlab_username: user.gitlab_username.clone(),
            gitlab_id: user.gitlab_id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            assigned_by: user.assigned_by.clone(),
            is_active: user.is_active,
            profile_image: user.profile_image.clone(),
            last_login_at: user.last_login_at.map(to_bson_datetime),
            created_at: to_bson_datetime(user.created_at),
            updated_at: to_bson_datetime(user.updated_at),
        }
    }

    /// `$setOnInsert` body for an upsert keyed on the GitLab username.
    ///
    /// The key field is left out: the upsert filter seeds it.
    pub(crate) fn to_insert_fields(&self) -> DbErrorResult<bson::Document> {
        let mut fields = bson::to_document(self)?;
        fields.remove(GITLAB_USERNAME_FIELD);
        Ok(fields)
    }
}

impl TryFrom<UserDocument> for User {
    type Error = DbError;

    fn try_from(document: UserDocument) -> DbErrorResult<Self> {
        let role = UserRole::from_str(&document.role).map_err(|e| {
            DbError::mapping(format!(
                "user {} has an unreadable role: {}",
                document.id, e
            ))
        })?;

        Ok(User {
            id: Some(document.id.to_hex()),
            gitlab_username: document.gitlab_username,
            gitlab_id: document.gitlab_id,
            name: document.name,
            email: document.email,
            role,
            assigned_by: document.assigned_by,
            is_active: document.is_active,
            profile_image: document.profile_image,
            last_login_at: document.last_login_at.map(from_bson_datetime).transpose()?,
            created_at: from_bson_datetime(document.created_at)?,
            updated_at: from_bson_datetime(document.updated_at)?,
        })
    }
}

pub(crate) fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

fn from_bson_datetime(value: bson::DateTime) -> DbErrorResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
        .ok_or_else(|| DbError::mapping(format!("timestamp out of range: {}", value)))
}
