//! Fact extraction
//!
//! Turns a community's eligible rows into facts, one per row:
//!
//! | Family    | Timestamp                         | Axes                                     |
//! |-----------|-----------------------------------|------------------------------------------|
//! | groups    | group creation                    | category, region                         |
//! | members   | membership join                   | owning group's category, region          |
//! | events    | event start                       | event category, group category/region    |
//! | attendees | registration (or event start)     | inherited from the event                 |
//!
//! Eligibility filtering and community scoping happen in the read queries; an
//! unknown community simply yields no facts.

use super::dimension_resolver::{DimensionRefs, DimensionResolver};
use crate::database::CommunityReadOperations;
use crate::errors::AppResult;
use crate::types::entities::{AttendanceRow, DimensionTables};
use crate::types::facts::{AttendeeTimeBasis, Family, Fact};
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

/// Extracts facts for one community from a store (or read snapshot)
pub struct FactExtractor<'a, S: CommunityReadOperations + ?Sized> {
    store: &'a S,
    community_id: Uuid,
    tables: DimensionTables,
    attendee_time_basis: AttendeeTimeBasis,
}

impl<'a, S: CommunityReadOperations + ?Sized> FactExtractor<'a, S> {
    /// Prepare an extractor, loading the community's reference names once
    pub fn load(
        store: &'a S,
        community_id: Uuid,
        attendee_time_basis: AttendeeTimeBasis,
    ) -> AppResult<Self> {
        let tables = store.get_dimension_tables(community_id)?;
        Ok(Self {
            store,
            community_id,
            tables,
            attendee_time_basis,
        })
    }

    /// Eligible facts of one family
    pub fn extract(&self, family: Family) -> AppResult<Vec<Fact>> {
        let facts = match family {
            Family::Groups => {
                let rows = self.store.get_group_rows(self.community_id)?;
                self.to_facts(&rows, family, |row| row.created_at)
            }
            Family::Members => {
                let rows = self.store.get_membership_rows(self.community_id)?;
                self.to_facts(&rows, family, |row| row.joined_at)
            }
            Family::Events => {
                let rows = self.store.get_event_rows(self.community_id)?;
                self.to_facts(&rows, family, |row| row.starts_at)
            }
            Family::Attendees => {
                let rows = self.store.get_attendance_rows(self.community_id)?;
                let basis = self.attendee_time_basis;
                self.to_facts(&rows, family, |row| attendee_timestamp(row, basis))
            }
        };

        debug!(
            "Extracted {} {} facts for community {}",
            facts.len(),
            family,
            self.community_id
        );
        Ok(facts)
    }

    fn to_facts<R, T>(&self, rows: &[R], family: Family, timestamp: T) -> Vec<Fact>
    where
        R: DimensionRefs,
        T: Fn(&R) -> DateTime<Utc>,
    {
        let resolver = DimensionResolver::new(&self.tables);
        rows.iter()
            .map(|row| {
                family
                    .axes()
                    .iter()
                    .fold(Fact::new(timestamp(row)), |fact, &axis| {
                        fact.with_label(axis, resolver.resolve(row, axis))
                    })
            })
            .collect()
    }
}

fn attendee_timestamp(row: &AttendanceRow, basis: AttendeeTimeBasis) -> DateTime<Utc> {
    match basis {
        AttendeeTimeBasis::Registration => row.registered_at,
        AttendeeTimeBasis::EventStart => row.event_starts_at,
    }
}
