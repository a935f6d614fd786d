//! Entity store for the community statistics engine.
//!
//! ## Architecture
//!
//! The `Database` struct holds a SQLite connection and provides:
//! - `CommunityReadOperations` - community-scoped reads (implemented for `Connection`)
//! - `DatasetOperations` - bulk import of entity rows
//! - `StatisticsOperations` - store row counts
//!
//! Reads that must observe one consistent state run through
//! [`Database::with_read_snapshot`].

mod community_reads;
pub mod helpers;
mod import;
pub mod query_helper;
pub mod schema;
pub mod statistics;
pub mod traits;

pub use query_helper::QueryHelper;
pub use schema::setup_schema;
pub use statistics::StoreStats;
pub use traits::*;

use crate::errors::AppResult;
use rusqlite::Connection;
use tracing::info;

/// The main database interface
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Open (or create) a database and initialise the schema
    ///
    /// Use `":memory:"` for an in-memory store.
    pub fn new(database_path: &str) -> AppResult<Self> {
        let connection = Connection::open(database_path)?;

        setup_schema(&connection)?;

        info!("Database initialised at: {}", database_path);
        Ok(Self { connection })
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Execute a function within a database transaction
    pub fn execute_transaction<F, R>(&mut self, f: F) -> AppResult<R>
    where
        F: FnOnce(&rusqlite::Transaction) -> AppResult<R>,
    {
        let tx = self.connection.transaction()?;
        let result = f(&tx)?;
        tx.commit()?;
        Ok(result)
    }

    /// Execute read-only work against a single consistent snapshot
    ///
    /// Every query issued by `f` sees the same committed state; concurrent
    /// writers on other connections are not observed mid-computation.
    pub fn with_read_snapshot<F, R>(&self, f: F) -> AppResult<R>
    where
        F: FnOnce(&Connection) -> AppResult<R>,
    {
        let tx = self.connection.unchecked_transaction()?;
        let result = f(&tx)?;
        tx.commit()?;
        Ok(result)
    }
}
