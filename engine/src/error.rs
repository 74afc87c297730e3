//! Error types for the FloraLab engine.

use crate::{CollectionName, RecordId};
use thiserror::Error;

/// All possible errors from the FloraLab engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Persistence errors
    #[error("storage rejected write for collection '{collection}': {reason}")]
    Storage {
        collection: CollectionName,
        reason: String,
    },

    #[error("failed to serialize collection '{collection}': {reason}")]
    Serialize {
        collection: CollectionName,
        reason: String,
    },

    // Lookup errors
    #[error("record not found in '{collection}': {id}")]
    RecordNotFound {
        collection: CollectionName,
        id: RecordId,
    },

    // Provider vocabulary errors
    #[error("unknown provider milestone: {0}")]
    UnknownMilestone(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::Storage {
            collection: "shipments".into(),
            reason: "quota exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "storage rejected write for collection 'shipments': quota exceeded"
        );

        let err = Error::UnknownMilestone("Teleported".into());
        assert_eq!(err.to_string(), "unknown provider milestone: Teleported");

        let err = Error::RecordNotFound {
            collection: "orders".into(),
            id: "ORD001".into(),
        };
        assert_eq!(err.to_string(), "record not found in 'orders': ORD001");
    }
}
