//! Database connection and operations

use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

use crate::migrations::run_migrations;
use crate::seed::apply_default_brands;
use crate::Result;

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path.as_ref())?;

        // WAL mode for better concurrent performance
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        run_migrations(&conn)?;

        tracing::debug!(path = %path.as_ref().display(), "Opened brand database");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    pub fn transaction<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let result = f(&tx)?;
        tx.commit()?;
        Ok(result)
    }

    /// Insert the default brands if this database has never been seeded.
    pub fn seed_defaults(&self) -> Result<bool> {
        let inserted = self.transaction(apply_default_brands)?;
        if inserted {
            tracing::info!("Inserted default brands");
        }
        Ok(inserted)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_BRANDS, SEED_MARKER_KEY};
    use rusqlite::OptionalExtension;

    fn seed_marker(db: &Database) -> Option<String> {
        db.with_connection(|conn| {
            Ok(conn
                .query_row(
                    "SELECT value FROM settings WHERE key = ?1",
                    [SEED_MARKER_KEY],
                    |row| row.get(0),
                )
                .optional()?)
        })
        .unwrap()
    }

    fn brand_count(db: &Database) -> i64 {
        db.with_connection(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM brands", [], |row| row.get(0))?)
        })
        .unwrap()
    }

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(brand_count(&db), 0);
    }

    #[test]
    fn test_seed_defaults_runs_once() {
        let db = Database::open_in_memory().unwrap();

        assert!(db.seed_defaults().unwrap());
        assert!(!db.seed_defaults().unwrap());
        assert_eq!(brand_count(&db), DEFAULT_BRANDS.len() as i64);
        assert!(seed_marker(&db).is_some());

        let names: Vec<String> = db
            .with_connection(|conn| {
                let mut stmt = conn.prepare("SELECT name FROM brands ORDER BY id")?;
                let names = stmt
                    .query_map([], |row| row.get(0))?
                    .collect::<rusqlite::Result<Vec<String>>>()?;
                Ok(names)
            })
            .unwrap();
        assert_eq!(names, vec!["Toyota", "Ford", "Volkswagen"]);
    }

    #[test]
    fn test_seed_not_reapplied_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("brands.db");

        {
            let db = Database::open(&path).unwrap();
            db.seed_defaults().unwrap();
            db.with_connection(|conn| {
                conn.execute("DELETE FROM brands", [])?;
                Ok(())
            })
            .unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert!(!db.seed_defaults().unwrap());
        assert_eq!(brand_count(&db), 0);
    }

    #[test]
    fn test_seed_skipped_when_rows_exist() {
        let db = Database::open_in_memory().unwrap();
        db.with_connection(|conn| {
            conn.execute("INSERT INTO brands (name) VALUES ('Honda')", [])?;
            Ok(())
        })
        .unwrap();

        assert!(!db.seed_defaults().unwrap());
        assert_eq!(brand_count(&db), 1);
        assert!(seed_marker(&db).is_some());
    }

    #[test]
    fn test_seed_skipped_after_ids_were_assigned() {
        let db = Database::open_in_memory().unwrap();
        db.with_connection(|conn| {
            conn.execute("INSERT INTO brands (name) VALUES ('Honda')", [])?;
            conn.execute("DELETE FROM brands", [])?;
            Ok(())
        })
        .unwrap();

        assert!(!db.seed_defaults().unwrap());
        assert_eq!(brand_count(&db), 0);
        assert!(seed_marker(&db).is_some());
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let db = Database::open_in_memory().unwrap();
        db.seed_defaults().unwrap();

        let next_id = db
            .with_connection(|conn| {
                conn.execute("DELETE FROM brands WHERE id = 3", [])?;
                conn.execute("INSERT INTO brands (name) VALUES ('Honda')", [])?;
                Ok(conn.last_insert_rowid())
            })
            .unwrap();
        assert_eq!(next_id, 4);
    }
}
