//! Default brand data
//!
//! Applied at most once per database. The settings table records that the
//! seed ran, so deleting the seeded rows does not bring them back on the
//! next start.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;

use crate::Result;

/// Settings key marking that the default brands were inserted.
pub const SEED_MARKER_KEY: &str = "seed.brands";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeedBrand {
    pub id: i64,
    pub name: &'static str,
}

pub const DEFAULT_BRANDS: [SeedBrand; 3] = [
    SeedBrand { id: 1, name: "Toyota" },
    SeedBrand { id: 2, name: "Ford" },
    SeedBrand { id: 3, name: "Volkswagen" },
];

/// Insert the default brands unless a previous run already did.
///
/// Returns `true` when rows were written. Expects to run inside a transaction.
pub(crate) fn apply_default_brands(conn: &Connection) -> Result<bool> {
    let applied: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [SEED_MARKER_KEY],
            |row| row.get(0),
        )
        .optional()?;

    if applied.is_some() {
        tracing::debug!("Default brands already applied, skipping seed");
        return Ok(false);
    }

    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM brands", [], |row| row.get(0))?;
    // Any id ever handed out, even if since deleted, rules out the fixed seed ids
    let last_assigned: Option<i64> = conn
        .query_row(
            "SELECT seq FROM sqlite_sequence WHERE name = 'brands'",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fresh = existing == 0 && last_assigned.unwrap_or(0) == 0;
    if fresh {
        let mut stmt = conn.prepare("INSERT INTO brands (id, name) VALUES (?1, ?2)")?;
        for brand in DEFAULT_BRANDS.iter() {
            stmt.execute(rusqlite::params![brand.id, brand.name])?;
        }
    } else {
        tracing::warn!(
            existing,
            last_assigned = last_assigned.unwrap_or(0),
            "Brands table already used, recording seed without inserting"
        );
    }

    let marker = serde_json::to_string(&DEFAULT_BRANDS)?;
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)",
        rusqlite::params![SEED_MARKER_KEY, marker, Utc::now().to_rfc3339()],
    )?;

    Ok(fresh)
}
