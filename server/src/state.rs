//! Shared request state
use brandstore_core::BrandRepository;
use std::sync::Arc;

use crate::error::ApiError;

/// Handle to the brand repository shared by all handlers.
pub struct AppState<R> {
    store: Arc<R>,
}

impl<R: BrandRepository + 'static> AppState<R> {
    pub fn new(store: R) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Run a repository call on the blocking pool.
    ///
    /// SQLite calls are synchronous, so they must not hold a runtime worker.
    pub async fn with_store<F, T>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&R) -> brandstore_core::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || f(store.as_ref())).await?;
        Ok(result?)
    }
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
