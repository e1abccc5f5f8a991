pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::admin_request::{CreateAdminRequest, UpdateAdminRequest};
pub use models::profile_update::ProfileUpdate;
pub use models::user::User;
pub use models::user_role::UserRole;

/// Provenance marker written to `assignedBy` for records created by the bootstrap tool
pub const BOOTSTRAP_ASSIGNED_BY: &str = "system_bootstrap";

/// Prefix of the placeholder `gitlabId` used when none is supplied
pub const DEFAULT_GITLAB_ID_PREFIX: &str = "admin_";
