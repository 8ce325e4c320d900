//! Brand Store
//!
//! SQLite-backed CRUD over the brand collection. Each operation is a single
//! statement; conflicting writes are serialized by SQLite itself.

use rusqlite::OptionalExtension;

use brandstore_storage::Database;

use crate::brand::{Brand, BrandUpdate, NewBrand};
use crate::config::Config;
use crate::error::BrandError;
use crate::Result;

/// Persistence operations for brands.
pub trait BrandRepository: Send + Sync {
    /// All brands in insertion order.
    fn list(&self) -> Result<Vec<Brand>>;

    /// Returns `Err(BrandError::NotFound)` if the brand doesn't exist.
    fn get(&self, id: i64) -> Result<Brand>;

    /// Returns the persisted brand with its assigned id.
    ///
    /// Returns `Err(BrandError::Validation)` if the name is missing or blank.
    fn create(&self, brand: &NewBrand) -> Result<Brand>;

    /// Replace the name of the brand at `id`.
    ///
    /// Returns `Err(BrandError::Mismatch)` if `update.id != id` and
    /// `Err(BrandError::NotFound)` if the brand doesn't exist.
    fn update(&self, id: i64, update: &BrandUpdate) -> Result<()>;

    /// Returns `Err(BrandError::NotFound)` if the brand doesn't exist.
    fn delete(&self, id: i64) -> Result<()>;
}

pub struct BrandStore {
    db: Database,
}

impl BrandStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the configured database and apply the default brands if enabled.
    pub fn open(config: &Config) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        if config.seed {
            db.seed_defaults()?;
        }

        tracing::info!(
            path = %config.database_path.display(),
            seed = config.seed,
            "Brand store ready"
        );

        Ok(Self::new(db))
    }
}

impl BrandRepository for BrandStore {
    fn list(&self) -> Result<Vec<Brand>> {
        Ok(self.db.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT id, name FROM brands ORDER BY id")?;

            let brands = stmt
                .query_map([], |row| {
                    Ok(Brand {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<Brand>>>()?;

            Ok(brands)
        })?)
    }

    fn get(&self, id: i64) -> Result<Brand> {
        let brand = self.db.with_connection(|conn| {
            let brand = conn
                .query_row("SELECT id, name FROM brands WHERE id = ?1", [id], |row| {
                    Ok(Brand {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                })
                .optional()?;
            Ok(brand)
        })?;

        brand.ok_or(BrandError::NotFound(id))
    }

    fn create(&self, brand: &NewBrand) -> Result<Brand> {
        let name = match brand.validated_name() {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!("Rejected brand create: {}", e);
                return Err(e);
            }
        };

        let id = self.db.with_connection(|conn| {
            conn.execute("INSERT INTO brands (name) VALUES (?1)", [name])?;
            Ok(conn.last_insert_rowid())
        })?;

        tracing::info!(brand_id = id, name = %name, "Created brand");

        Ok(Brand {
            id,
            name: name.to_string(),
        })
    }

    fn update(&self, id: i64, update: &BrandUpdate) -> Result<()> {
        if update.id != id {
            tracing::debug!(path_id = id, body_id = update.id, "Rejected brand update");
            return Err(BrandError::Mismatch {
                path_id: id,
                body_id: update.id,
            });
        }

        let changed = self.db.with_connection(|conn| {
            Ok(conn.execute(
                "UPDATE brands SET name = ?1 WHERE id = ?2",
                rusqlite::params![update.name, id],
            )?)
        })?;

        if changed == 0 {
            return Err(BrandError::NotFound(id));
        }

        tracing::info!(brand_id = id, name = %update.name, "Updated brand");
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let removed = self.db.with_connection(|conn| {
            Ok(conn.execute("DELETE FROM brands WHERE id = ?1", [id])?)
        })?;

        if removed == 0 {
            return Err(BrandError::NotFound(id));
        }

        tracing::info!(brand_id = id, "Deleted brand");
        Ok(())
    }
}

impl Clone for BrandStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
