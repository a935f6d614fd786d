//! Community-scoped read queries.
//!
//! Scope is applied through the join path: groups directly, memberships and
//! events through the owning group, attendances through event → group.

use crate::database::helpers::{
    attendance_row_from_row, event_row_from_row, group_row_from_row, membership_row_from_row,
    ATTENDANCE_COLUMNS, ELIGIBLE_EVENT_FILTER, EVENT_COLUMNS, GROUP_COLUMNS, MEMBERSHIP_COLUMNS,
};
use crate::database::query_helper::QueryHelper;
use crate::database::traits::CommunityReadOperations;
use crate::errors::AppResult;
use crate::types::entities::{
    AttendanceRow, DimensionTables, EventRow, GroupRow, MembershipRow,
};
use rusqlite::Connection;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

fn load_names(
    conn: &Connection,
    table: &str,
    id_column: &str,
    community_id: Uuid,
) -> AppResult<HashMap<Uuid, String>> {
    let sql = format!(
        "SELECT {}, name FROM {} WHERE community_id = ?1",
        id_column, table
    );
    let pairs: Vec<(Uuid, String)> =
        conn.query_collect(&sql, [community_id], |row| Ok((row.get(0)?, row.get(1)?)))?;
    Ok(pairs.into_iter().collect())
}

impl CommunityReadOperations for Connection {
    fn get_dimension_tables(&self, community_id: Uuid) -> AppResult<DimensionTables> {
        let tables = DimensionTables {
            group_categories: load_names(
                self,
                "group_categories",
                "group_category_id",
                community_id,
            )?,
            regions: load_names(self, "regions", "region_id", community_id)?,
            event_categories: load_names(
                self,
                "event_categories",
                "event_category_id",
                community_id,
            )?,
        };

        debug!(
            "Loaded dimension tables for {}: {} group categories, {} regions, {} event categories",
            community_id,
            tables.group_categories.len(),
            tables.regions.len(),
            tables.event_categories.len()
        );
        Ok(tables)
    }

    fn get_group_rows(&self, community_id: Uuid) -> AppResult<Vec<GroupRow>> {
        let sql = format!(
            "SELECT {}
             FROM groups g
             WHERE g.community_id = ?1
               AND g.deleted = 0
             ORDER BY g.created_at, g.group_id",
            GROUP_COLUMNS
        );
        self.query_collect(&sql, [community_id], group_row_from_row)
    }

    fn get_membership_rows(&self, community_id: Uuid) -> AppResult<Vec<MembershipRow>> {
        let sql = format!(
            "SELECT {}
             FROM group_members gm
             JOIN groups g ON g.group_id = gm.group_id
             WHERE g.community_id = ?1
               AND g.deleted = 0
             ORDER BY gm.joined_at, gm.group_id, gm.user_id",
            MEMBERSHIP_COLUMNS
        );
        self.query_collect(&sql, [community_id], membership_row_from_row)
    }

    fn get_event_rows(&self, community_id: Uuid) -> AppResult<Vec<EventRow>> {
        let sql = format!(
            "SELECT {}
             FROM events e
             JOIN groups g ON g.group_id = e.group_id
             WHERE g.community_id = ?1
               AND {}
             ORDER BY e.starts_at, e.event_id",
            EVENT_COLUMNS, ELIGIBLE_EVENT_FILTER
        );
        self.query_collect(&sql, [community_id], event_row_from_row)
    }

    fn get_attendance_rows(&self, community_id: Uuid) -> AppResult<Vec<AttendanceRow>> {
        let sql = format!(
            "SELECT {}
             FROM event_attendees ea
             JOIN events e ON e.event_id = ea.event_id
             JOIN groups g ON g.group_id = e.group_id
             WHERE g.community_id = ?1
               AND {}
             ORDER BY ea.registered_at, ea.event_id, ea.user_id",
            ATTENDANCE_COLUMNS, ELIGIBLE_EVENT_FILTER
        );
        self.query_collect(&sql, [community_id], attendance_row_from_row)
    }
}
