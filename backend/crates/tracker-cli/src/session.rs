use crate::{AdminResult, startup};

use tracker_db::{MongoConnection, MongoUserRepository, UserStore};

use async_trait::async_trait;

/// Where a command gets its user store from.
///
/// `open` is called only after the arguments have been validated, and
/// `close` runs on every path once `open` has been attempted.
#[async_trait]
pub trait StoreSession: Send {
    async fn open(&mut self) -> AdminResult<&dyn UserStore>;

    async fn close(self);
}

/// Loads configuration, starts logging and connects to MongoDB on `open`.
#[derive(Default)]
pub struct MongoSession {
    connection: Option<MongoConnection>,
    repository: Option<MongoUserRepository>,
}

#[async_trait]
impl StoreSession for MongoSession {
    async fn open(&mut self) -> AdminResult<&dyn UserStore> {
        let config = startup::load_config()?;

        let connection = self
            .connection
            .insert(MongoConnection::connect(&config.database).await?);
        let repository = self
            .repository
            .insert(MongoUserRepository::new(connection));

        Ok(repository)
    }

    async fn close(self) {
        if let Some(connection) = self.connection {
            connection.close().await;
        }
    }
}

/// A store the caller already holds; nothing to open or close.
#[async_trait]
impl<'a, S: UserStore> StoreSession for &'a S {
    async fn open(&mut self) -> AdminResult<&dyn UserStore> {
        Ok(*self)
    }

    async fn close(self) {}
}
