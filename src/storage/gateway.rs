//! Item storage gateway
//!
//! Owns persistence for the item table. Every operation opens its own
//! connection and drops it before returning, so a failed request never leaves
//! a session behind. Writes run inside an IMMEDIATE transaction: the
//! uniqueness pre-check and the write it guards see the same snapshot.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use tracing::debug;

use super::errors::{is_unique_violation, StorageError, StorageResult};
use super::migrations;
use crate::query::ItemFilter;
use crate::schema::{Item, ItemData};

const SELECT_ITEM: &str =
    "SELECT id, name, description, price, tax, listed_since, manufacturer FROM items";

/// Handle to the item database.
///
/// Cheap to clone: it holds only the location and session settings.
#[derive(Debug, Clone)]
pub struct ItemGateway {
    path: PathBuf,
    busy_timeout: Duration,
}

impl ItemGateway {
    /// Open the database at `path`, creating it if needed, and apply pending
    /// migrations.
    pub fn open(path: impl Into<PathBuf>, busy_timeout: Duration) -> StorageResult<Self> {
        let gateway = Self {
            path: path.into(),
            busy_timeout,
        };

        let mut conn = gateway.session()?;
        let applied = migrations::migrate(&mut conn)?;
        debug!(path = %gateway.path.display(), applied, "item database ready");

        Ok(gateway)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scoped connection for one unit of work
    fn session(&self) -> StorageResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }

    /// Insert a new item.
    ///
    /// `listed_since` defaults to today's local date.
    ///
    /// # Errors
    ///
    /// `Conflict` if an item with exactly this name exists.
    pub fn create(&self, data: ItemData) -> StorageResult<Item> {
        let mut conn = self.session()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if name_taken(&tx, &data.name, None)? {
            debug!(name = %data.name, "create rejected: duplicate name");
            return Err(StorageError::Conflict(data.name));
        }

        let listed_since = data.listed_since.unwrap_or_else(today);
        tx.execute(
            "INSERT INTO items (name, description, price, tax, listed_since, manufacturer)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                data.name,
                data.description,
                data.price,
                data.tax,
                listed_since,
                data.manufacturer
            ],
        )
        .map_err(|e| conflict_or_backend(e, &data.name))?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!(id, name = %data.name, "item created");
        Ok(Item {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            tax: data.tax,
            listed_since,
            manufacturer: data.manufacturer,
        })
    }

    /// Point lookup by id
    pub fn get(&self, id: i64) -> StorageResult<Item> {
        let conn = self.session()?;
        fetch(&conn, id)?.ok_or(StorageError::NotFound(id))
    }

    /// All items matching `filter`, ordered by id
    pub fn list(&self, filter: &ItemFilter) -> StorageResult<Vec<Item>> {
        let conn = self.session()?;
        let mut stmt = conn.prepare(&format!("{SELECT_ITEM} ORDER BY id"))?;
        let items = stmt
            .query_map([], item_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let scanned = items.len();
        let matched = filter.apply(items);
        debug!(
            scanned,
            matched = matched.len(),
            predicates = filter.predicates().len(),
            "items listed"
        );
        Ok(matched)
    }

    /// Replace every mutable field of an existing item.
    ///
    /// `listed_since` is only replaced when the replacement carries one.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no item has this id
    /// - `Conflict` if a different item already uses the new name
    pub fn update(&self, id: i64, data: ItemData) -> StorageResult<Item> {
        let mut conn = self.session()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing = fetch(&tx, id)?.ok_or(StorageError::NotFound(id))?;
        if name_taken(&tx, &data.name, Some(id))? {
            debug!(id, name = %data.name, "update rejected: duplicate name");
            return Err(StorageError::Conflict(data.name));
        }

        let listed_since = data.listed_since.unwrap_or(existing.listed_since);
        tx.execute(
            "UPDATE items
             SET name = ?1, description = ?2, price = ?3, tax = ?4,
                 listed_since = ?5, manufacturer = ?6
             WHERE id = ?7",
            params![
                data.name,
                data.description,
                data.price,
                data.tax,
                listed_since,
                data.manufacturer,
                id
            ],
        )
        .map_err(|e| conflict_or_backend(e, &data.name))?;
        tx.commit()?;

        debug!(id, "item updated");
        Ok(Item {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            tax: data.tax,
            listed_since,
            manufacturer: data.manufacturer,
        })
    }

    /// Permanently remove an item.
    ///
    /// # Errors
    ///
    /// `NotFound` if nothing was removed.
    pub fn delete(&self, id: i64) -> StorageResult<()> {
        let conn = self.session()?;
        let removed = conn.execute("DELETE FROM items WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(StorageError::NotFound(id));
        }

        debug!(id, "item deleted");
        Ok(())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn fetch(conn: &Connection, id: i64) -> StorageResult<Option<Item>> {
    let item = conn
        .query_row(
            &format!("{SELECT_ITEM} WHERE id = ?1"),
            params![id],
            item_from_row,
        )
        .optional()?;
    Ok(item)
}

/// Exact, case-sensitive name match, optionally ignoring one id
fn name_taken(conn: &Connection, name: &str, except: Option<i64>) -> StorageResult<bool> {
    let taken = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM items WHERE name = ?1 AND (?2 IS NULL OR id != ?2))",
        params![name, except],
        |row| row.get(0),
    )?;
    Ok(taken)
}

/// The UNIQUE constraint backs up the pre-check
fn conflict_or_backend(err: rusqlite::Error, name: &str) -> StorageError {
    if is_unique_violation(&err) {
        StorageError::Conflict(name.to_string())
    } else {
        StorageError::Backend(err)
    }
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        tax: row.get(4)?,
        listed_since: row.get(5)?,
        manufacturer: row.get(6)?,
    })
}
