//! Shared row mapping for the community read queries
//!
//! Each mapper expects the column order of the matching `*_COLUMNS` constant.
//! Use the constant when building queries to keep the order consistent.

use crate::types::entities::{AttendanceRow, EventRow, GroupRow, MembershipRow};
use rusqlite::Row;

/// Columns for GroupRow queries (alias `g` = groups)
pub const GROUP_COLUMNS: &str = "g.group_id, g.group_category_id, g.region_id, g.created_at";

/// Columns for MembershipRow queries (aliases `gm` = group_members, `g` = groups)
pub const MEMBERSHIP_COLUMNS: &str =
    "gm.group_id, gm.user_id, gm.joined_at, g.group_category_id, g.region_id";

/// Columns for EventRow queries (aliases `e` = events, `g` = groups)
pub const EVENT_COLUMNS: &str =
    "e.event_id, e.starts_at, e.event_category_id, g.group_category_id, g.region_id";

/// Columns for AttendanceRow queries (aliases `ea` = event_attendees, `e`, `g`)
pub const ATTENDANCE_COLUMNS: &str = "ea.event_id, ea.user_id, ea.registered_at, e.starts_at, \
     e.event_category_id, g.group_category_id, g.region_id";

/// Eligibility filter shared by events and attendees (alias `e` = events)
pub const ELIGIBLE_EVENT_FILTER: &str =
    "e.published = 1 AND e.canceled = 0 AND e.deleted = 0 AND e.starts_at IS NOT NULL";

pub fn group_row_from_row(row: &Row) -> rusqlite::Result<GroupRow> {
    Ok(GroupRow {
        group_id: row.get(0)?,
        group_category_id: row.get(1)?,
        region_id: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn membership_row_from_row(row: &Row) -> rusqlite::Result<MembershipRow> {
    Ok(MembershipRow {
        group_id: row.get(0)?,
        user_id: row.get(1)?,
        joined_at: row.get(2)?,
        group_category_id: row.get(3)?,
        region_id: row.get(4)?,
    })
}

pub fn event_row_from_row(row: &Row) -> rusqlite::Result<EventRow> {
    Ok(EventRow {
        event_id: row.get(0)?,
        starts_at: row.get(1)?,
        event_category_id: row.get(2)?,
        group_category_id: row.get(3)?,
        group_region_id: row.get(4)?,
    })
}

pub fn attendance_row_from_row(row: &Row) -> rusqlite::Result<AttendanceRow> {
    Ok(AttendanceRow {
        event_id: row.get(0)?,
        user_id: row.get(1)?,
        registered_at: row.get(2)?,
        event_starts_at: row.get(3)?,
        event_category_id: row.get(4)?,
        group_category_id: row.get(5)?,
        group_region_id: row.get(6)?,
    })
}
