//! update-admin - change an existing admin's name or email
//!
//! ```bash
//! update-admin --gitlab_username=amruthjakku --email="amruthjakku@gmail.com"
//! ```

use tracker_cli::{MongoSession, run_update_admin};

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    run_update_admin(std::env::args_os(), MongoSession::default())
        .await
        .emit()
}
