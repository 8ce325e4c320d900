//! BrandStore Storage Layer
//!
//! SQLite-based persistence for the brand collection.
//! Schema changes go through versioned migrations; the default
//! brands are applied once by the seed step.

mod database;
mod error;
mod migrations;
mod seed;

pub use database::Database;
pub use error::StorageError;
pub use seed::{SeedBrand, DEFAULT_BRANDS, SEED_MARKER_KEY};

pub type Result<T> = std::result::Result<T, StorageError>;
