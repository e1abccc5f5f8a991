//! Console text printed by the admin binaries.
//!
//! Everything here is pure formatting so the wording can be tested without
//! a terminal. The binaries print the returned strings to stdout.

use crate::{
    AdminError, AdminResult, CreateAdminCli, CreateAdminOutcome, UpdateAdminCli,
    UpdateAdminOutcome,
};

use tracker_core::User;

pub fn create_banner(cli: &CreateAdminCli) -> String {
    format!(
        "🚀 Creating admin user for Internship Tracker...\n   \
         GitLab Username: {}\n   Name: {}\n   Email: {}\n",
        cli.gitlab_username, cli.name, cli.email
    )
}

pub fn create_outcome(outcome: &CreateAdminOutcome) -> String {
    match outcome {
        CreateAdminOutcome::Created(created) => {
            let mut text = String::from("✅ Successfully created admin user!\n");
            text.push_str(&user_details(&created.user));
            text.push_str(&format!("   User ID: {}\n", created.user_id()));

            if created.is_first_admin() {
                text.push_str("🎉 This is the first admin user in the system!\n");
            } else {
                text.push_str(&format!(
                    "📊 Total admins in system: {}\n",
                    created.total_admins()
                ));
            }
            text
        }
        CreateAdminOutcome::AlreadyExists { gitlab_username } => format!(
            "❌ Admin with GitLab username '{}' already exists!\n",
            gitlab_username
        ),
    }
}

pub fn create_next_steps() -> String {
    String::from(
        "🎯 Next Steps:\n\
         1. Start your Next.js application\n\
         2. Login with your GitLab account\n\
         3. You'll be automatically recognized as an admin\n\
         4. Use the admin dashboard to add mentors and colleges\n",
    )
}

pub fn create_failed(error: Option<&AdminError>) -> String {
    let mut text = String::new();
    if let Some(error) = error {
        text.push_str(&format!("❌ Error creating admin: {}\n", error));
    }
    text.push_str("\n❌ Failed to create admin user. Please check the error above.\n");
    text
}

/// Everything printed after the banner for a finished create-admin run
pub fn create_result(result: &AdminResult<CreateAdminOutcome>) -> String {
    match result {
        Ok(outcome @ CreateAdminOutcome::Created(_)) => {
            let mut text = create_outcome(outcome);
            text.push('\n');
            text.push_str(&create_next_steps());
            text
        }
        Ok(outcome) => {
            let mut text = create_outcome(outcome);
            text.push_str(&create_failed(None));
            text
        }
        Err(e) => create_failed(Some(e)),
    }
}

pub fn update_banner(cli: &UpdateAdminCli) -> String {
    let mut text = format!(
        "🔄 Updating admin user for Internship Tracker...\n   GitLab Username: {}\n",
        cli.gitlab_username
    );
    if let Some(ref email) = cli.email {
        text.push_str(&format!("   New Email: {}\n", email));
    }
    if let Some(ref name) = cli.name {
        text.push_str(&format!("   New Name: {}\n", name));
    }
    text
}

pub fn update_outcome(outcome: &UpdateAdminOutcome) -> String {
    match outcome {
        UpdateAdminOutcome::Updated { before, after } => {
            let mut text = String::from("📋 Current admin user details:\n");
            text.push_str(&user_details(before));
            text.push_str("\n✅ Successfully updated admin user!\n");
            text.push_str("📋 Updated admin user details:\n");
            text.push_str(&user_details(after));
            text.push_str(&format!(
                "   Last Updated: {}\n",
                after.updated_at.to_rfc3339()
            ));
            text
        }
        UpdateAdminOutcome::NotFound { gitlab_username } => format!(
            "❌ Admin user with GitLab username '{}' not found!\n",
            gitlab_username
        ),
    }
}

pub fn update_failed(error: Option<&AdminError>) -> String {
    let mut text = String::new();
    if let Some(error) = error {
        text.push_str(&format!("❌ Error updating admin: {}\n", error));
    }
    text.push_str("\n❌ Failed to update admin user. Please check the error above.\n");
    text
}

pub fn update_result(result: &AdminResult<UpdateAdminOutcome>) -> String {
    match result {
        Ok(outcome @ UpdateAdminOutcome::Updated { .. }) => {
            let mut text = update_outcome(outcome);
            text.push_str("\n🎯 Admin user updated successfully!\n");
            text
        }
        Ok(outcome) => {
            let mut text = update_outcome(outcome);
            text.push_str(&update_failed(None));
            text
        }
        Err(e) => update_failed(Some(e)),
    }
}

fn user_details(user: &User) -> String {
    format!(
        "   GitLab Username: {}\n   Name: {}\n   Email: {}\n   Role: {}\n",
        user.gitlab_username, user.name, user.email, user.role
    )
}
