use crate::AdminResult;

use tracker_core::{CreateAdminRequest, User, UserRole};
use tracker_db::{InsertOutcome, UserStore};

use chrono::Utc;
use log::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateAdminOutcome {
    Created(CreatedAdmin),
    /// A record with this username exists; nothing was written
    AlreadyExists { gitlab_username: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAdmin {
    /// The record as inserted, with its generated id
    pub user: User,
    /// Admins present before this one was created
    pub prior_admin_count: u64,
}

impl CreatedAdmin {
    pub fn user_id(&self) -> &str {
        self.user.id.as_deref().unwrap_or_default()
    }

    pub fn is_first_admin(&self) -> bool {
        self.prior_admin_count == 0
    }

    pub fn total_admins(&self) -> u64 {
        self.prior_admin_count + 1
    }
}

impl CreateAdminOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Create an admin record unless one with the same username exists.
///
/// The existence check and the write are a single `insert_if_absent`, so no
/// existing record is ever modified. Admins are counted only once the insert
/// has succeeded; the count is informational.
pub async fn create_admin(
    store: &dyn UserStore,
    request: &CreateAdminRequest,
) -> AdminResult<CreateAdminOutcome> {
    let mut user = User::bootstrap_admin(request, Utc::now());

    match store.insert_if_absent(&user).await? {
        InsertOutcome::Inserted { id } => {
            info!("Created admin {} with id {}", user.gitlab_username, id);
            user.id = Some(id);

            let prior_admin_count = store
                .count_by_role(UserRole::Admin)
                .await?
                .saturating_sub(1);

            Ok(CreateAdminOutcome::Created(CreatedAdmin {
                user,
                prior_admin_count,
            }))
        }
        InsertOutcome::AlreadyExists => {
            warn!("User {} already exists; nothing written", user.gitlab_username);
            Ok(CreateAdminOutcome::AlreadyExists {
                gitlab_username: user.gitlab_username,
            })
        }
    }
}
