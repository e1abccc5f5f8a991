pub mod connection;
mod documents;
pub mod error;
pub mod repositories;
pub mod user_store;


pub use connection::mongo_connection::MongoConnection;
pub use error::{DbError, Result};
pub use repositories::memory_user_repository::InMemoryUserRepository;
pub use repositories::mongo_user_repository::MongoUserRepository;
pub use user_store::{InsertOutcome, UserStore};

/// MongoDB server error code for a unique index violation
pub const DUPLICATE_KEY_CODE: i32 = 11000;
