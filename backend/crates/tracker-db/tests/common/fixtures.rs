use tracker_core::{CreateAdminRequest, User, UserRole};

use chrono::Utc;

/// Creates a bootstrap admin record for `username`
pub fn create_test_admin(username: &str) -> User {
    let request = CreateAdminRequest::new(
        username,
        "Test Admin",
        &format!("{}@example.com", username),
        None,
    )
    .expect("valid admin request");
    User::bootstrap_admin(&request, Utc::now())
}

/// Creates a user record with the given role, as the web application would
pub fn create_test_user(username: &str, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id: None,
        gitlab_username: username.to_lowercase(),
        gitlab_id: format!("gl_{}", username.to_lowercase()),
        name: format!("Test {}", role),
        email: format!("{}@example.com", username.to_lowercase()),
        role,
        assigned_by: "test_mentor".to_string(),
        is_active: true,
        profile_image: None,
        last_login_at: None,
        created_at: now,
        updated_at: now,
    }
}
