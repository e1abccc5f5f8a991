#![allow(dead_code)]

use tracker_core::{CreateAdminRequest, ProfileUpdate, UpdateAdminRequest, User, UserRole};
use tracker_db::{DbError, InsertOutcome, Result as DbResult, UserStore};

use async_trait::async_trait;
use chrono::Utc;

pub fn create_request(username: &str, name: &str, email: &str) -> CreateAdminRequest {
    CreateAdminRequest::new(username, name, email, None).expect("valid admin request")
}

pub fn update_request(
    username: &str,
    name: Option<&str>,
    email: Option<&str>,
) -> UpdateAdminRequest {
    UpdateAdminRequest::new(username, name, email).expect("valid update request")
}

/// A record as the web application would have written it
pub fn existing_user(username: &str, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id: None,
        gitlab_username: username.to_string(),
        gitlab_id: format!("gl_{}", username),
        name: format!("Existing {}", role),
        email: format!("{}@example.com", username),
        role,
        assigned_by: "mentor_one".to_string(),
        is_active: true,
        profile_image: None,
        last_login_at: None,
        created_at: now,
        updated_at: now,
    }
}

/// A store whose every call fails, as an unreachable server would
pub struct UnreachableUserStore;

fn unreachable() -> DbError {
    DbError::mapping("server selection timeout")
}

#[async_trait]
impl UserStore for UnreachableUserStore {
    async fn ensure_indexes(&self) -> DbResult<()> {
        Err(unreachable())
    }

    async fn find_by_gitlab_username(&self, _: &str) -> DbResult<Option<User>> {
        Err(unreachable())
    }

    async fn find_by_gitlab_username_and_role(
        &self,
        _: &str,
        _: UserRole,
    ) -> DbResult<Option<User>> {
        Err(unreachable())
    }

    async fn count_by_role(&self, _: UserRole) -> DbResult<u64> {
        Err(unreachable())
    }

    async fn insert_if_absent(&self, _: &User) -> DbResult<InsertOutcome> {
        Err(unreachable())
    }

    async fn update_profile(
        &self,
        _: &str,
        _: UserRole,
        _: &ProfileUpdate,
    ) -> DbResult<Option<User>> {
        Err(unreachable())
    }
}
