pub mod admin_request;
pub mod profile_update;
pub mod user;
pub mod user_role;
