//! BrandStore Core
//!
//! The car brand collection: model, validation and the SQLite-backed store.
//! Every read and write goes through [`BrandRepository`].

mod brand;
mod config;
mod error;
mod store;

pub use brand::{Brand, BrandUpdate, NewBrand};
pub use config::Config;
pub use error::BrandError;
pub use store::{BrandRepository, BrandStore};

pub use brandstore_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, BrandError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
