use std::panic::Location;

use error_location::ErrorLocation;
use mongodb::bson;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("MongoDB error: {source} {location}")]
    Mongo {
        source: mongodb::error::Error,
        location: ErrorLocation,
    },

    #[error("BSON serialization error: {source} {location}")]
    Serialization {
        source: bson::ser::Error,
        location: ErrorLocation,
    },

    #[error("Document mapping error: {message} {location}")]
    Mapping {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn mapping<S: Into<String>>(message: S) -> Self {
        Self::Mapping {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<mongodb::error::Error> for DbError {
    #[track_caller]
    fn from(source: mongodb::error::Error) -> Self {
        Self::Mongo {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<bson::ser::Error> for DbError {
    #[track_caller]
    fn from(source: bson::ser::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
