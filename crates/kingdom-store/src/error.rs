use thiserror::Error;

use crate::collection::Collection;

/// Failure of a single store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Document {collection}/{id} not found")]
    NotFound { collection: Collection, id: String },

    #[error("Invalid field path: {0:?}")]
    InvalidPath(String),

    #[error("Cannot decode document {id}: {source}")]
    Decode {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot encode fields: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
