//! Raw rows read from the entity store
//!
//! These carry foreign keys rather than display names; labels are resolved
//! afterwards against the community's reference tables.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// Non-deleted group of a community
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRow {
    pub group_id: Uuid,
    pub group_category_id: Uuid,
    pub region_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Membership in a non-deleted group, with the owning group's dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipRow {
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub joined_at: DateTime<Utc>,
    pub group_category_id: Uuid,
    pub region_id: Option<Uuid>,
}

/// Published, non-canceled, non-deleted event with its hosting group's dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub event_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub event_category_id: Uuid,
    pub group_category_id: Uuid,
    pub group_region_id: Option<Uuid>,
}

/// Registration for an eligible event; dimensions are inherited from the event
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRow {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub registered_at: DateTime<Utc>,
    pub event_starts_at: DateTime<Utc>,
    pub event_category_id: Uuid,
    pub group_category_id: Uuid,
    pub group_region_id: Option<Uuid>,
}

/// Display names of a community's reference data, keyed by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionTables {
    pub group_categories: HashMap<Uuid, String>,
    pub regions: HashMap<Uuid, String>,
    pub event_categories: HashMap<Uuid, String>,
}
