use crate::AdminResult;

use tracker_core::{UpdateAdminRequest, User, UserRole};
use tracker_db::UserStore;

use chrono::Utc;
use log::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAdminOutcome {
    Updated { before: User, after: User },
    /// No record with this username and the admin role
    NotFound { gitlab_username: String },
}

/// Change the name and/or email of an existing admin.
pub async fn update_admin(
    store: &dyn UserStore,
    request: &UpdateAdminRequest,
) -> AdminResult<UpdateAdminOutcome> {
    let not_found = || UpdateAdminOutcome::NotFound {
        gitlab_username: request.gitlab_username.clone(),
    };

    let Some(before) = store
        .find_by_gitlab_username_and_role(&request.gitlab_username, UserRole::Admin)
        .await?
    else {
        warn!("No admin named {}", request.gitlab_username);
        return Ok(not_found());
    };

    let update = request.to_profile_update(Utc::now());

    // The record can disappear or lose its role between the two calls.
    match store
        .update_profile(&request.gitlab_username, UserRole::Admin, &update)
        .await?
    {
        Some(after) => {
            info!("Updated admin {}", after.gitlab_username);
            Ok(UpdateAdminOutcome::Updated { before, after })
        }
        None => Ok(not_found()),
    }
}
