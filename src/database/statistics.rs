//! Store statistics for reporting.

use crate::database::query_helper::QueryHelper;
use crate::database::traits::StatisticsOperations;
use crate::database::Database;
use crate::errors::AppResult;
use serde::Serialize;

/// Row counts per table
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub communities: usize,
    pub group_categories: usize,
    pub regions: usize,
    pub event_categories: usize,
    pub users: usize,
    pub groups: usize,
    pub deleted_groups: usize,
    pub group_members: usize,
    pub events: usize,
    pub published_events: usize,
    pub event_attendees: usize,
}

impl StatisticsOperations for Database {
    fn get_store_stats(&self) -> AppResult<StoreStats> {
        let conn = self.connection();
        let count = |table: &str, filter: Option<&str>| -> AppResult<usize> {
            Ok(conn.count_rows(table, filter)? as usize)
        };

        Ok(StoreStats {
            communities: count("communities", None)?,
            group_categories: count("group_categories", None)?,
            regions: count("regions", None)?,
            event_categories: count("event_categories", None)?,
            users: count("users", None)?,
            groups: count("groups", None)?,
            deleted_groups: count("groups", Some("deleted = 1"))?,
            group_members: count("group_members", None)?,
            events: count("events", None)?,
            published_events: count(
                "events",
                Some("published = 1 AND canceled = 0 AND deleted = 0"),
            )?,
            event_attendees: count("event_attendees", None)?,
        })
    }
}
