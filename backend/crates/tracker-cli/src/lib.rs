//! tracker-cli library
//!
//! The admin operations behind the `create-admin` and `update-admin`
//! binaries, exported so they can run against any [`tracker_db::UserStore`].

pub mod admin;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod report;
pub mod session;
pub mod startup;


pub use admin::create_admin::{CreateAdminOutcome, CreatedAdmin, create_admin};
pub use admin::ensure_indexes_or_warn;
pub use admin::update_admin::{UpdateAdminOutcome, update_admin};
pub use cli::{CreateAdminCli, UpdateAdminCli};
pub use commands::{
    CommandOutput, create_admin_exit_code, run_create_admin, run_update_admin,
    update_admin_exit_code,
};
pub use error::{AdminError, FailureReason, Result as AdminResult};
pub use session::{MongoSession, StoreSession};
