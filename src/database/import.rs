//! Dataset import.
//!
//! Inserts run parents-first so foreign keys hold at every step:
//! communities → reference data → users → groups → memberships → events →
//! attendances.

use crate::database::traits::DatasetOperations;
use crate::database::Database;
use crate::errors::AppResult;
use crate::types::dataset::{Dataset, ReferenceRecord};
use rusqlite::{params, Transaction};
use tracing::{debug, info};

fn insert_references(
    tx: &Transaction,
    table: &str,
    id_column: &str,
    records: &[ReferenceRecord],
) -> AppResult<usize> {
    let sql = format!(
        "INSERT INTO {} ({}, community_id, name) VALUES (?1, ?2, ?3)",
        table, id_column
    );
    let mut stmt = tx.prepare_cached(&sql)?;
    for record in records {
        stmt.execute(params![record.id, record.community_id, record.name])?;
    }
    debug!("Inserted {} rows into {}", records.len(), table);
    Ok(records.len())
}

fn insert_all(tx: &Transaction, dataset: &Dataset) -> AppResult<usize> {
    let mut inserted = 0;

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO communities (community_id, name, display_name, created_at)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for community in &dataset.communities {
            stmt.execute(params![
                community.community_id,
                community.name,
                community.display_name,
                community.created_at
            ])?;
        }
        inserted += dataset.communities.len();
    }

    inserted += insert_references(
        tx,
        "group_categories",
        "group_category_id",
        &dataset.group_categories,
    )?;
    inserted += insert_references(tx, "regions", "region_id", &dataset.regions)?;
    inserted += insert_references(
        tx,
        "event_categories",
        "event_category_id",
        &dataset.event_categories,
    )?;

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO users (user_id, username, created_at) VALUES (?1, ?2, ?3)",
        )?;
        for user in &dataset.users {
            stmt.execute(params![user.user_id, user.username, user.created_at])?;
        }
        inserted += dataset.users.len();
    }

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO groups (group_id, community_id, group_category_id, region_id,
                                 name, created_at, deleted)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        for group in &dataset.groups {
            stmt.execute(params![
                group.group_id,
                group.community_id,
                group.group_category_id,
                group.region_id,
                group.name,
                group.created_at,
                group.deleted
            ])?;
        }
        inserted += dataset.groups.len();
    }

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO group_members (group_id, user_id, joined_at) VALUES (?1, ?2, ?3)",
        )?;
        for member in &dataset.group_members {
            stmt.execute(params![member.group_id, member.user_id, member.joined_at])?;
        }
        inserted += dataset.group_members.len();
    }

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO events (event_id, group_id, event_category_id, name, starts_at,
                                 published, canceled, deleted)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        for event in &dataset.events {
            stmt.execute(params![
                event.event_id,
                event.group_id,
                event.event_category_id,
                event.name,
                event.starts_at,
                event.published,
                event.canceled,
                event.deleted
            ])?;
        }
        inserted += dataset.events.len();
    }

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO event_attendees (event_id, user_id, registered_at) VALUES (?1, ?2, ?3)",
        )?;
        for attendee in &dataset.event_attendees {
            stmt.execute(params![
                attendee.event_id,
                attendee.user_id,
                attendee.registered_at
            ])?;
        }
        inserted += dataset.event_attendees.len();
    }

    Ok(inserted)
}

impl DatasetOperations for Database {
    fn import_dataset(&mut self, dataset: &Dataset) -> AppResult<usize> {
        let inserted = self.execute_transaction(|tx| insert_all(tx, dataset))?;
        info!("Imported {} rows", inserted);
        Ok(inserted)
    }
}
