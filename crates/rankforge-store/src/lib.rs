//! Rankforge Storage Layer
//!
//! Implements the RankStore trait over SQLite: one row per
//! `(username, rank_id)` pair with a position column preserving rank-set
//! order, plus the rank catalog table the normalizer's category lookups
//! come from.
//!
//! # Examples
//!
//! ```no_run
//! use rankforge_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for rank operations
//! ```

#![warn(missing_docs)]

use rankforge_domain::traits::RankStore;
use rankforge_domain::{CategoryId, MemoryCatalog, RankId, RankInfo};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O error reading a catalog seed file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog seed file did not parse
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),
}

/// Catalog seed file shape: a list of `[[rank]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    rank: Vec<CatalogFileEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogFileEntry {
    id: String,
    name: String,
    category: String,
    #[serde(default)]
    price_cents: u32,
}

/// SQLite-based implementation of RankStore.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteStore instance. The `&mut` receivers on mutating operations make a
/// single store the serialization point for read-modify-write cycles, and
/// `save_ranks` replaces a user's rows inside one transaction.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path.
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rankforge_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("rankforge.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Insert or update one catalog entry
    pub fn upsert_catalog_entry(&mut self, info: &RankInfo) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO catalog (rank_id, name, category, price_cents)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (rank_id) DO UPDATE SET
                 name = excluded.name,
                 category = excluded.category,
                 price_cents = excluded.price_cents",
            params![
                info.id.as_str(),
                &info.name,
                info.category.as_str(),
                info.price_cents,
            ],
        )?;
        Ok(())
    }

    /// Load the whole catalog into an in-memory snapshot.
    ///
    /// The snapshot is read-only and safely shareable, which is what the
    /// normalizer expects of a lookup held across a sweep.
    pub fn catalog_snapshot(&self) -> Result<MemoryCatalog, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT rank_id, name, category, price_cents FROM catalog")?;
        let entries = stmt
            .query_map([], |row| {
                Ok(RankInfo {
                    id: RankId::new(row.get::<_, String>(0)?),
                    name: row.get(1)?,
                    category: CategoryId::new(row.get::<_, String>(2)?),
                    price_cents: row.get::<_, i64>(3)? as u32,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MemoryCatalog::new(entries))
    }

    /// Seed the catalog table from a TOML file of `[[rank]]` entries.
    ///
    /// Existing entries with the same rank id are updated. Returns the
    /// number of entries read from the file.
    ///
    /// ```toml
    /// [[rank]]
    /// id = "vip"
    /// name = "VIP"
    /// category = "rank"
    /// price_cents = 499
    /// ```
    pub fn load_catalog_toml<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&contents)?;
        let count = file.rank.len();
        for entry in file.rank {
            self.upsert_catalog_entry(&RankInfo {
                id: RankId::new(entry.id),
                name: entry.name,
                category: CategoryId::new(entry.category),
                price_cents: entry.price_cents,
            })?;
        }
        Ok(count)
    }

    /// Next free position in a user's rank set
    fn next_position(&self, username: &str) -> Result<i64, StoreError> {
        let max: Option<i64> = self.conn.query_row(
            "SELECT MAX(position) FROM user_ranks WHERE username = ?1",
            params![username],
            |row| row.get(0),
        )?;
        Ok(max.map_or(0, |m| m + 1))
    }
}

impl RankStore for SqliteStore {
    type Error = StoreError;

    fn load_ranks(&self, username: &str) -> Result<Option<Vec<RankId>>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT rank_id FROM user_ranks WHERE username = ?1 ORDER BY position",
        )?;
        let ranks = stmt
            .query_map(params![username], |row| {
                Ok(RankId::new(row.get::<_, String>(0)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        // A user with zero rows has no record.
        if ranks.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ranks))
        }
    }

    fn save_ranks(&mut self, username: &str, ranks: &[RankId]) -> Result<(), Self::Error> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM user_ranks WHERE username = ?1",
            params![username],
        )?;
        for (position, rank) in ranks.iter().enumerate() {
            tx.execute(
                "INSERT INTO user_ranks (username, rank_id, position) VALUES (?1, ?2, ?3)",
                params![username, rank.as_str(), position as i64],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn grant_rank(&mut self, username: &str, rank: &RankId) -> Result<bool, Self::Error> {
        let held: bool = self
            .conn
            .query_row(
                "SELECT 1 FROM user_ranks WHERE username = ?1 AND rank_id = ?2",
                params![username, rank.as_str()],
                |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false);
        if held {
            return Ok(false);
        }

        let position = self.next_position(username)?;
        self.conn.execute(
            "INSERT INTO user_ranks (username, rank_id, position) VALUES (?1, ?2, ?3)",
            params![username, rank.as_str(), position],
        )?;
        Ok(true)
    }

    fn revoke_rank(&mut self, username: &str, rank: &RankId) -> Result<bool, Self::Error> {
        let affected = self.conn.execute(
            "DELETE FROM user_ranks WHERE username = ?1 AND rank_id = ?2",
            params![username, rank.as_str()],
        )?;
        Ok(affected > 0)
    }

    fn list_users(&self) -> Result<Vec<String>, Self::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT username FROM user_ranks ORDER BY username")?;
        let users = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }
}
