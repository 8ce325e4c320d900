//! Brand error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrandError {
    #[error("{0}")]
    Validation(String),

    #[error("Brand id mismatch: address has {path_id}, payload has {body_id}")]
    Mismatch { path_id: i64, body_id: i64 },

    #[error("Brand not found: {0}")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] brandstore_storage::StorageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BrandError {
    /// Whether the caller can fix the request and try again.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BrandError::Validation(_) | BrandError::Mismatch { .. } | BrandError::NotFound(_)
        )
    }
}
