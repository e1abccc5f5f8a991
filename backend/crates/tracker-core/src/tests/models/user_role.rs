use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Admin.as_str(), "admin");
    assert_eq!(UserRole::Mentor.as_str(), "mentor");
    assert_eq!(UserRole::Intern.as_str(), "intern");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
    assert_eq!(UserRole::from_str("mentor").unwrap(), UserRole::Mentor);
    assert_eq!(UserRole::from_str("intern").unwrap(), UserRole::Intern);
    assert!(UserRole::from_str("Admin").is_err());
    assert!(UserRole::from_str("superuser").is_err());
}

#[test]
fn test_user_role_default() {
    assert_eq!(UserRole::default(), UserRole::Intern);
}

#[test]
fn test_user_role_display_matches_stored_form() {
    assert_eq!(UserRole::Admin.to_string(), "admin");
}
