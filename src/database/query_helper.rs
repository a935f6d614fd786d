//! Query helper utilities for common database patterns
//!
//! Consolidates the prepare + query_map + collect pattern and simple row
//! counting used by the community read queries and store statistics.

use crate::errors::AppResult;
use rusqlite::{Connection, Params, Row};

/// Helper trait for common database query patterns
///
/// Implemented for `rusqlite::Connection`; a `rusqlite::Transaction` derefs to
/// a connection, so the helpers work inside read snapshots too.
///
/// ## Usage Examples
///
/// ```ignore
/// use crate::database::QueryHelper;
///
/// let groups = conn.count_rows("groups", Some("deleted = 0"))?;
///
/// let names: Vec<(Uuid, String)> = conn.query_collect(
///     "SELECT region_id, name FROM regions WHERE community_id = ?1",
///     [community_id],
///     |row| Ok((row.get(0)?, row.get(1)?)),
/// )?;
/// ```
pub trait QueryHelper {
    /// Query a COUNT(*) result for any table
    ///
    /// # Arguments
    /// * `table` - Table name (e.g., "groups")
    /// * `where_clause` - Optional WHERE condition (e.g., Some("deleted = 0"))
    fn count_rows(&self, table: &str, where_clause: Option<&str>) -> AppResult<i64>;

    /// Execute a parameterised query returning multiple rows, collecting into Vec
    fn query_collect<T, P, F>(&self, sql: &str, params: P, mapper: F) -> AppResult<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row) -> rusqlite::Result<T>;
}

impl QueryHelper for Connection {
    fn count_rows(&self, table: &str, where_clause: Option<&str>) -> AppResult<i64> {
        let sql = if let Some(where_part) = where_clause {
            format!("SELECT COUNT(*) FROM {} WHERE {}", table, where_part)
        } else {
            format!("SELECT COUNT(*) FROM {}", table)
        };

        self.query_row(&sql, [], |row| row.get(0))
            .map_err(Into::into)
    }

    fn query_collect<T, P, F>(&self, sql: &str, params: P, mut mapper: F) -> AppResult<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row) -> rusqlite::Result<T>,
    {
        let mut stmt = self.prepare(sql)?;
        let results = stmt
            .query_map(params, &mut mapper)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(results)
    }
}
