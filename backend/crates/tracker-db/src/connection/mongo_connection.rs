use crate::Result as DbErrorResult;
use crate::documents::user_document::UserDocument;

use tracker_config::DatabaseConfig;

use log::{debug, info};
use mongodb::{Client, Collection, Database};

/// One client handle for the lifetime of a command.
///
/// The driver connects lazily, so `connect` only fails on an unparseable
/// connection string; network failures surface on the first operation.
/// Callers own the handle and must call [`MongoConnection::close`] on every path.
pub struct MongoConnection {
    client: Client,
    database: Database,
    collection_name: &'static str,
}

impl MongoConnection {
    pub async fn connect(config: &DatabaseConfig) -> DbErrorResult<Self> {
        let database_name = config.database_name();
        debug!(
            "Creating MongoDB client for {} (database {})",
            config.redacted_uri(),
            database_name
        );

        let client = Client::with_uri_str(&config.uri).await?;
        let database = client.database(&database_name);

        info!("MongoDB client ready: {}", database_name);

        Ok(Self {
            client,
            database,
            collection_name: config.collection_name(),
        })
    }

    pub(crate) fn users(&self) -> Collection<UserDocument> {
        self.database.collection(self.collection_name)
    }

    /// Shut the client down, waiting for in-flight operations to finish.
    pub async fn close(self) {
        self.client.shutdown().await;
        debug!("MongoDB client closed");
    }
}
