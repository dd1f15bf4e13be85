//! Schema migrations
//!
//! Migrations are applied in order, each in its own transaction. The number
//! of applied migrations is kept in `PRAGMA user_version`, so running the
//! migrator again is a no-op.

use rusqlite::Connection;
use tracing::info;

use super::errors::{StorageError, StorageResult};

/// Ordered migration scripts. Never edit an entry once released; append.
pub const MIGRATIONS: &[&str] = &[
    // 1: items table
    "CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(25) NOT NULL UNIQUE,
        description TEXT,
        price REAL NOT NULL,
        tax REAL,
        listed_since TEXT NOT NULL,
        manufacturer TEXT NOT NULL
    );",
];

/// Current schema version of a database
pub fn schema_version(conn: &Connection) -> StorageResult<usize> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(usize::try_from(version).unwrap_or(0))
}

/// Apply every pending migration. Returns the number applied.
pub fn migrate(conn: &mut Connection) -> StorageResult<usize> {
    let current = schema_version(conn)?;
    let mut applied = 0;

    for (index, script) in MIGRATIONS.iter().enumerate().skip(current) {
        let version = index + 1;
        apply(conn, version, script).map_err(|source| StorageError::Migration { version, source })?;
        info!(version, "applied schema migration");
        applied += 1;
    }

    Ok(applied)
}

fn apply(conn: &mut Connection, version: usize, script: &str) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(script)?;
    tx.pragma_update(None, "user_version", version as i64)?;
    tx.commit()
}
