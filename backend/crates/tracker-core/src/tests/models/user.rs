use crate::{BOOTSTRAP_ASSIGNED_BY, CreateAdminRequest, User, UserRole};

use chrono::Utc;
use googletest::prelude::*;

#[test]
fn given_request_when_building_bootstrap_admin_then_fixed_fields_are_set() {
    // Given
    let request = CreateAdminRequest::new(
        "amruthjakku",
        "Amruth Jakku",
        "amruth@example.com",
        None,
    )
    .unwrap();
    let now = Utc::now();

    // When
    let user = User::bootstrap_admin(&request, now);

    // Then
    assert_that!(user.id, none());
    assert_that!(user.gitlab_username, eq("amruthjakku"));
    assert_that!(user.gitlab_id, eq("admin_amruthjakku"));
    assert_that!(user.email, eq("amruth@example.com"));
    assert_that!(user.role, eq(UserRole::Admin));
    assert_that!(user.assigned_by, eq(BOOTSTRAP_ASSIGNED_BY));
    assert_that!(user.is_active, eq(true));
    assert_that!(user.profile_image, none());
    assert_that!(user.last_login_at, none());
    assert_that!(user.created_at, eq(now));
    assert_that!(user.updated_at, eq(now));
}
