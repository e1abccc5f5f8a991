//! The full `create-admin` / `update-admin` flows, from raw arguments to
//! console text and exit code.

use crate::{
    AdminResult, CreateAdminCli, CreateAdminOutcome, StoreSession, UpdateAdminCli,
    UpdateAdminOutcome, create_admin, ensure_indexes_or_warn, report, update_admin,
};

use tracker_core::{CreateAdminRequest, UpdateAdminRequest};

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use log::error;

/// What a command printed and how it exits
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: ExitCode,
}

impl CommandOutput {
    fn usage(error: clap::Error) -> Self {
        let text = error.render().to_string();
        let exit_code = ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(2));

        if error.use_stderr() {
            Self {
                stdout: String::new(),
                stderr: text,
                exit_code,
            }
        } else {
            Self {
                stdout: text,
                stderr: String::new(),
                exit_code,
            }
        }
    }

    /// Write the captured text to the process streams and hand back the exit code.
    pub fn emit(self) -> ExitCode {
        print!("{}", self.stdout);
        eprint!("{}", self.stderr);
        self.exit_code
    }
}

pub fn create_admin_exit_code(result: &AdminResult<CreateAdminOutcome>) -> ExitCode {
    match result {
        Ok(CreateAdminOutcome::Created(_)) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

pub fn update_admin_exit_code(result: &AdminResult<UpdateAdminOutcome>) -> ExitCode {
    match result {
        Ok(UpdateAdminOutcome::Updated { .. }) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Parse `args`, then create the admin through `session`.
///
/// The session is never opened when the arguments are missing or invalid.
pub async fn run_create_admin<I, T, S>(args: I, session: S) -> CommandOutput
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: StoreSession,
{
    let cli = match CreateAdminCli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return CommandOutput::usage(e),
    };

    let mut stdout = report::create_banner(&cli);
    stdout.push('\n');

    let result = match cli.to_request() {
        Ok(request) => execute_create_admin(&request, session).await,
        Err(e) => Err(e.into()),
    };

    if let Err(ref e) = result {
        error!("create-admin failed ({}): {}", e.reason(), e);
    }
    stdout.push_str(&report::create_result(&result));

    CommandOutput {
        stdout,
        stderr: String::new(),
        exit_code: create_admin_exit_code(&result),
    }
}

/// Parse `args`, then update the admin through `session`.
pub async fn run_update_admin<I, T, S>(args: I, session: S) -> CommandOutput
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: StoreSession,
{
    let cli = match UpdateAdminCli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return CommandOutput::usage(e),
    };

    let mut stdout = report::update_banner(&cli);
    stdout.push('\n');

    let result = match cli.to_request() {
        Ok(request) => execute_update_admin(&request, session).await,
        Err(e) => Err(e.into()),
    };

    if let Err(ref e) = result {
        error!("update-admin failed ({}): {}", e.reason(), e);
    }
    stdout.push_str(&report::update_result(&result));

    CommandOutput {
        stdout,
        stderr: String::new(),
        exit_code: update_admin_exit_code(&result),
    }
}

async fn execute_create_admin<S: StoreSession>(
    request: &CreateAdminRequest,
    mut session: S,
) -> AdminResult<CreateAdminOutcome> {
    let result = match session.open().await {
        Ok(store) => {
            ensure_indexes_or_warn(store).await;
            create_admin(store, request).await
        }
        Err(e) => Err(e),
    };

    session.close().await;
    result
}

async fn execute_update_admin<S: StoreSession>(
    request: &UpdateAdminRequest,
    mut session: S,
) -> AdminResult<UpdateAdminOutcome> {
    let result = match session.open().await {
        Ok(store) => update_admin(store, request).await,
        Err(e) => Err(e),
    };

    session.close().await;
    result
}
