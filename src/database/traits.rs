//! Database trait abstractions
//!
//! Read operations are implemented for `rusqlite::Connection` so they run the
//! same way on a plain connection and inside a read transaction (which derefs
//! to a connection). Write operations belong to `Database` because they need a
//! write transaction.

use crate::database::StoreStats;
use crate::errors::AppResult;
use crate::types::dataset::Dataset;
use crate::types::entities::{
    AttendanceRow, DimensionTables, EventRow, GroupRow, MembershipRow,
};
use uuid::Uuid;

/// Community-scoped read queries over the entity store
///
/// Every query returns an empty result, never an error, for an unknown
/// community. Eligibility filters (soft deletion, publication) are applied here.
pub trait CommunityReadOperations {
    /// Display names of the community's group categories, regions and event categories
    fn get_dimension_tables(&self, community_id: Uuid) -> AppResult<DimensionTables>;

    /// Groups that are not soft-deleted
    fn get_group_rows(&self, community_id: Uuid) -> AppResult<Vec<GroupRow>>;

    /// Memberships of groups that are not soft-deleted
    fn get_membership_rows(&self, community_id: Uuid) -> AppResult<Vec<MembershipRow>>;

    /// Published, non-canceled, non-deleted events with a start instant
    fn get_event_rows(&self, community_id: Uuid) -> AppResult<Vec<EventRow>>;

    /// Registrations for events that pass the event filter
    fn get_attendance_rows(&self, community_id: Uuid) -> AppResult<Vec<AttendanceRow>>;
}

/// Bulk loading of entity rows
pub trait DatasetOperations {
    /// Insert every row of the dataset in one transaction, in FK-safe order.
    /// Returns the number of rows inserted.
    fn import_dataset(&mut self, dataset: &Dataset) -> AppResult<usize>;
}

/// Statistics and reporting operations
pub trait StatisticsOperations {
    /// Row counts per table
    fn get_store_stats(&self) -> AppResult<StoreStats>;
}
