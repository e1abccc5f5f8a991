use crate::Result as DbErrorResult;

use tracker_core::{ProfileUpdate, User, UserRole};

use async_trait::async_trait;

/// Result of an atomic insert-if-absent write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new record was written with this id
    Inserted { id: String },
    /// A record with the same GitLab username already existed; nothing was written
    AlreadyExists,
}

/// Access to the application's user collection.
///
/// Usernames passed in must already be lower-cased; implementations compare
/// them verbatim.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create the unique index on the GitLab username if it does not exist.
    async fn ensure_indexes(&self) -> DbErrorResult<()>;

    async fn find_by_gitlab_username(&self, gitlab_username: &str)
    -> DbErrorResult<Option<User>>;

    async fn find_by_gitlab_username_and_role(
        &self,
        gitlab_username: &str,
        role: UserRole,
    ) -> DbErrorResult<Option<User>>;

    async fn count_by_role(&self, role: UserRole) -> DbErrorResult<u64>;

    /// Insert `user` unless a record with its GitLab username exists.
    ///
    /// The existence check and the write happen in one step; concurrent
    /// callers with the same username produce exactly one record.
    async fn insert_if_absent(&self, user: &User) -> DbErrorResult<InsertOutcome>;

    /// Apply `update` to the record matching username and role, returning
    /// the record as stored afterwards.
    async fn update_profile(
        &self,
        gitlab_username: &str,
        role: UserRole,
        update: &ProfileUpdate,
    ) -> DbErrorResult<Option<User>>;
}
