//! In-process [`UserStore`] used by tests and by callers that want to
//! exercise the admin operations without a MongoDB server.

use crate::{InsertOutcome, Result as DbErrorResult, UserStore};

use tracker_core::{ProfileUpdate, User, UserRole};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    operations: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store; records without an id get a fresh one.
    pub fn with_users(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|mut user| {
                user.id.get_or_insert_with(|| ObjectId::new().to_hex());
                user
            })
            .collect();

        Self {
            users: Mutex::new(users),
            operations: AtomicUsize::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of the stored records in insertion order
    pub fn users(&self) -> Vec<User> {
        self.lock().clone()
    }

    /// Number of [`UserStore`] calls made so far
    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record_operation(&self) {
        self.operations.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn ensure_indexes(&self) -> DbErrorResult<()> {
        self.record_operation();
        Ok(())
    }

    async fn find_by_gitlab_username(
        &self,
        gitlab_username: &str,
    ) -> DbErrorResult<Option<User>> {
        self.record_operation();
        Ok(self
            .lock()
            .iter()
            .find(|user| user.gitlab_username == gitlab_username)
            .cloned())
    }

    async fn find_by_gitlab_username_and_role(
        &self,
        gitlab_username: &str,
        role: UserRole,
    ) -> DbErrorResult<Option<User>> {
        self.record_operation();
        Ok(self
            .lock()
            .iter()
            .find(|user| user.gitlab_username == gitlab_username && user.role == role)
            .cloned())
    }

    async fn count_by_role(&self, role: UserRole) -> DbErrorResult<u64> {
        self.record_operation();
        Ok(self.lock().iter().filter(|user| user.role == role).count() as u64)
    }

    async fn insert_if_absent(&self, user: &User) -> DbErrorResult<InsertOutcome> {
        self.record_operation();

        // Check and insert under one lock, matching the atomic upsert.
        let mut users = self.lock();
        if users
            .iter()
            .any(|existing| existing.gitlab_username == user.gitlab_username)
        {
            return Ok(InsertOutcome::AlreadyExists);
        }

        let id = ObjectId::new().to_hex();
        let mut stored = user.clone();
        stored.id = Some(id.clone());
        users.push(stored);

        Ok(InsertOutcome::Inserted { id })
    }

    async fn update_profile(
        &self,
        gitlab_username: &str,
        role: UserRole,
        update: &ProfileUpdate,
    ) -> DbErrorResult<Option<User>> {
        self.record_operation();

        let mut users = self.lock();
        let Some(user) = users
            .iter_mut()
            .find(|user| user.gitlab_username == gitlab_username && user.role == role)
        else {
            return Ok(None);
        };

        if let Some(ref name) = update.name {
            user.name = name.clone();
        }
        if let Some(ref email) = update.email {
            user.email = email.clone();
        }
        user.updated_at = update.updated_at;

        Ok(Some(user.clone()))
    }
}
