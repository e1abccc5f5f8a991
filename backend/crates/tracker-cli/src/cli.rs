use tracker_core::{CreateAdminRequest, Result as CoreResult, UpdateAdminRequest};

use clap::Parser;

/// Create the first admin user for Internship Tracker
#[derive(Parser, Debug)]
#[command(name = "create-admin")]
#[command(version)]
pub struct CreateAdminCli {
    /// GitLab username of the admin user
    #[arg(long = "gitlab_username", visible_alias = "gitlab-username")]
    pub gitlab_username: String,

    /// Full name of the admin user
    #[arg(long)]
    pub name: String,

    /// Email address of the admin user
    #[arg(long)]
    pub email: String,

    /// GitLab user ID (generated from the username if not provided)
    #[arg(long = "gitlab_id", visible_alias = "gitlab-id")]
    pub gitlab_id: Option<String>,
}

impl CreateAdminCli {
    pub fn to_request(&self) -> CoreResult<CreateAdminRequest> {
        CreateAdminRequest::new(
            &self.gitlab_username,
            &self.name,
            &self.email,
            self.gitlab_id.as_deref(),
        )
    }
}

/// Update an existing Internship Tracker admin's name or email
#[derive(Parser, Debug)]
#[command(name = "update-admin")]
#[command(version)]
pub struct UpdateAdminCli {
    /// GitLab username of the admin to update
    #[arg(long = "gitlab_username", visible_alias = "gitlab-username")]
    pub gitlab_username: String,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,

    /// New full name
    #[arg(long)]
    pub name: Option<String>,
}

impl UpdateAdminCli {
    pub fn to_request(&self) -> CoreResult<UpdateAdminRequest> {
        UpdateAdminRequest::new(
            &self.gitlab_username,
            self.name.as_deref(),
            self.email.as_deref(),
        )
    }
}
