use tracker_config::{ConnectionSource, DatabaseConfig, USERS_COLLECTION};
use tracker_db::{MongoConnection, MongoUserRepository};

use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Client, IndexModel};

/// Server used by the MongoDB suite, e.g. `mongodb://localhost:27017`.
/// The suite is skipped when it is not set.
pub const TEST_MONGODB_URI_ENV_VAR: &str = "TRACKER_TEST_MONGODB_URI";

/// A throwaway database on the test server, dropped by [`TestDatabase::cleanup`].
pub struct TestDatabase {
    pub connection: MongoConnection,
    pub repository: MongoUserRepository,
    base_uri: String,
    database_name: String,
}

impl TestDatabase {
    /// Connect to a fresh database, or `None` when no test server is configured.
    pub async fn create() -> Option<Self> {
        let base_uri = match std::env::var(TEST_MONGODB_URI_ENV_VAR) {
            Ok(uri) if !uri.is_empty() => uri,
            _ => {
                eprintln!("{} not set; skipping MongoDB test", TEST_MONGODB_URI_ENV_VAR);
                return None;
            }
        };

        let database_name = format!("tracker_test_{}", ObjectId::new().to_hex());
        let config = DatabaseConfig {
            uri: format!("{}/{}", base_uri.trim_end_matches('/'), database_name),
            source: ConnectionSource::Environment,
        };

        let connection = MongoConnection::connect(&config)
            .await
            .expect("Failed to create test client");
        let repository = MongoUserRepository::new(&connection);

        Some(Self {
            connection,
            repository,
            base_uri,
            database_name,
        })
    }

    /// Add a unique index on `field`, as the web application's schema does
    /// for fields this crate does not index itself.
    pub async fn create_unique_index(&self, field: &str) {
        let client = Client::with_uri_str(&self.base_uri)
            .await
            .expect("Failed to create index client");
        let index = IndexModel::builder()
            .keys(doc! { field: 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        client
            .database(&self.database_name)
            .collection::<Document>(USERS_COLLECTION)
            .create_index(index)
            .await
            .expect("Failed to create unique index");
        client.shutdown().await;
    }

    pub async fn cleanup(self) {
        let client = Client::with_uri_str(&self.base_uri)
            .await
            .expect("Failed to create cleanup client");
        client
            .database(&self.database_name)
            .drop()
            .await
            .expect("Failed to drop test database");
        client.shutdown().await;
        self.connection.close().await;
    }
}
