use crate::{CoreError, CreateAdminRequest, UpdateAdminRequest};

use chrono::Utc;
use googletest::prelude::*;

#[test]
fn given_mixed_case_identity_and_email_when_creating_request_then_both_are_lower_cased() {
    // When
    let request =
        CreateAdminRequest::new("Amruth", "Amruth Jakku", "Amruth@Example.COM", None).unwrap();

    // Then
    assert_that!(request.gitlab_username, eq("amruth"));
    assert_that!(request.email, eq("amruth@example.com"));
    assert_that!(request.name, eq("Amruth Jakku"));
}

#[test]
fn given_no_gitlab_id_when_resolving_effective_id_then_placeholder_uses_lower_cased_identity() {
    // Given
    let request = CreateAdminRequest::new("AmruthJakku", "Amruth", "a@b.c", None).unwrap();

    // Then
    assert_that!(request.effective_gitlab_id(), eq("admin_amruthjakku"));
}

#[test]
fn given_empty_gitlab_id_when_creating_request_then_placeholder_is_used() {
    // Given
    let request = CreateAdminRequest::new("amruth", "Amruth", "a@b.c", Some("")).unwrap();

    // Then
    assert_that!(request.gitlab_id, none());
    assert_that!(request.effective_gitlab_id(), eq("admin_amruth"));
}

#[test]
fn given_explicit_gitlab_id_when_resolving_effective_id_then_it_is_kept_verbatim() {
    // Given
    let request = CreateAdminRequest::new("amruth", "Amruth", "a@b.c", Some("GL-4821")).unwrap();

    // Then
    assert_that!(request.effective_gitlab_id(), eq("GL-4821"));
}

#[test]
fn given_empty_email_when_creating_request_then_validation_error() {
    // When
    let result = CreateAdminRequest::new("amruth", "Amruth", "", None);

    // Then
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_unusual_but_non_empty_values_when_creating_request_then_accepted() {
    // When
    let result = CreateAdminRequest::new("not a username!", "x", "not-an-email", None);

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_only_email_when_creating_update_request_then_ok_with_lower_cased_email() {
    // When
    let request = UpdateAdminRequest::new("Amruth", None, Some("New@Mail.com")).unwrap();

    // Then
    assert_that!(request.gitlab_username, eq("amruth"));
    assert_that!(request.email, some(eq("new@mail.com")));
    assert_that!(request.name, none());
}

#[test]
fn given_no_fields_when_creating_update_request_then_validation_error() {
    // When
    let result = UpdateAdminRequest::new("amruth", Some(""), None);

    // Then
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_update_request_when_converting_to_profile_update_then_timestamp_is_set() {
    // Given
    let request = UpdateAdminRequest::new("amruth", Some("Amruth J"), None).unwrap();
    let now = Utc::now();

    // When
    let update = request.to_profile_update(now);

    // Then
    assert_that!(update.name, some(eq("Amruth J")));
    assert_that!(update.email, none());
    assert_that!(update.updated_at, eq(now));
}
