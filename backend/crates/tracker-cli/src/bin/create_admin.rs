//! create-admin - bootstrap an Internship Tracker admin
//!
//! ```bash
//! create-admin --gitlab_username=amruthjakku --name="Amruth Jakku" --email="amruth@example.com"
//! ```
//!
//! Exits 0 when the admin was created, 1 when it already existed or
//! anything failed.

use tracker_cli::{MongoSession, run_create_admin};

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    run_create_admin(std::env::args_os(), MongoSession::default())
        .await
        .emit()
}
