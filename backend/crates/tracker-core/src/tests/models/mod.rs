mod admin_request;
mod user;
mod user_role;
