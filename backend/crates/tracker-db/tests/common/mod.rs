#![allow(dead_code)]

mod fixtures;
mod test_db;

pub use fixtures::{create_test_admin, create_test_user};
pub use test_db::TestDatabase;
