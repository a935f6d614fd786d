//! Entity store schema
//!
//! ## Table Groups
//!
//! - **Communities & reference data**: `communities`, `group_categories`,
//!   `regions`, `event_categories` (id → display name, scoped by community)
//! - **Groups & membership**: `users`, `groups`, `group_members`
//! - **Events & attendance**: `events`, `event_attendees`
//!
//! Instants are stored as UTC text through rusqlite's chrono support and
//! identifiers as 16-byte UUID blobs. Soft deletion is a flag; rows are never
//! removed by the dashboard.

use crate::errors::AppResult;
use rusqlite::Connection;
use tracing::debug;

/// Current schema version, stored in `PRAGMA user_version`
pub const SCHEMA_VERSION: i64 = 1;

/// Initialise the complete schema (idempotent)
pub fn setup_schema(connection: &Connection) -> AppResult<()> {
    connection.execute_batch(
        r#"
        PRAGMA user_version = 1;
        PRAGMA foreign_keys = ON;

        -- ═══════════════════════════════════════════════════════════════════════════
        -- Communities & reference data
        -- ═══════════════════════════════════════════════════════════════════════════

        CREATE TABLE IF NOT EXISTS communities (
            community_id BLOB PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            display_name TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS group_categories (
            group_category_id BLOB PRIMARY KEY,
            community_id BLOB NOT NULL REFERENCES communities(community_id),
            name TEXT NOT NULL,
            UNIQUE (community_id, name)
        );

        CREATE TABLE IF NOT EXISTS regions (
            region_id BLOB PRIMARY KEY,
            community_id BLOB NOT NULL REFERENCES communities(community_id),
            name TEXT NOT NULL,
            UNIQUE (community_id, name)
        );

        CREATE TABLE IF NOT EXISTS event_categories (
            event_category_id BLOB PRIMARY KEY,
            community_id BLOB NOT NULL REFERENCES communities(community_id),
            name TEXT NOT NULL,
            UNIQUE (community_id, name)
        );

        -- ═══════════════════════════════════════════════════════════════════════════
        -- Groups & membership
        -- ═══════════════════════════════════════════════════════════════════════════

        CREATE TABLE IF NOT EXISTS users (
            user_id BLOB PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS groups (
            group_id BLOB PRIMARY KEY,
            community_id BLOB NOT NULL REFERENCES communities(community_id),
            group_category_id BLOB NOT NULL REFERENCES group_categories(group_category_id),
            region_id BLOB REFERENCES regions(region_id),   -- NULLABLE: region is optional
            name TEXT NOT NULL,
            created_at TEXT NOT NULL,
            deleted BOOLEAN NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_groups_community ON groups(community_id)
            WHERE deleted = 0;

        CREATE TABLE IF NOT EXISTS group_members (
            group_id BLOB NOT NULL REFERENCES groups(group_id),
            user_id BLOB NOT NULL REFERENCES users(user_id),
            joined_at TEXT NOT NULL,
            PRIMARY KEY (group_id, user_id)
        );

        -- ═══════════════════════════════════════════════════════════════════════════
        -- Events & attendance
        -- ═══════════════════════════════════════════════════════════════════════════

        CREATE TABLE IF NOT EXISTS events (
            event_id BLOB PRIMARY KEY,
            group_id BLOB NOT NULL REFERENCES groups(group_id),
            event_category_id BLOB NOT NULL REFERENCES event_categories(event_category_id),
            name TEXT NOT NULL,
            starts_at TEXT,                   -- NULLABLE: drafts may not be scheduled yet
            published BOOLEAN NOT NULL DEFAULT 0,
            canceled BOOLEAN NOT NULL DEFAULT 0,
            deleted BOOLEAN NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_events_group ON events(group_id)
            WHERE published = 1 AND canceled = 0 AND deleted = 0;

        CREATE TABLE IF NOT EXISTS event_attendees (
            event_id BLOB NOT NULL REFERENCES events(event_id),
            user_id BLOB NOT NULL REFERENCES users(user_id),
            registered_at TEXT NOT NULL,
            PRIMARY KEY (event_id, user_id)
        );
        "#,
    )?;

    debug!("Schema version {} ready", SCHEMA_VERSION);
    Ok(())
}
