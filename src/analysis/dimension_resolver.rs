//! Dimension label resolution
//!
//! Maps the foreign keys carried by a raw row to the display names of the
//! referenced category or region. A null or dangling key resolves to `None`;
//! no placeholder label is ever produced.

use crate::types::entities::{
    AttendanceRow, DimensionTables, EventRow, GroupRow, MembershipRow,
};
use crate::types::facts::Axis;
use std::collections::HashMap;
use uuid::Uuid;

/// Raw rows that reference dimension values by id
pub trait DimensionRefs {
    /// Foreign key this row holds for `axis`, if any
    fn reference(&self, axis: Axis) -> Option<Uuid>;
}

impl DimensionRefs for GroupRow {
    fn reference(&self, axis: Axis) -> Option<Uuid> {
        match axis {
            Axis::Category => Some(self.group_category_id),
            Axis::Region => self.region_id,
            _ => None,
        }
    }
}

impl DimensionRefs for MembershipRow {
    fn reference(&self, axis: Axis) -> Option<Uuid> {
        match axis {
            Axis::Category => Some(self.group_category_id),
            Axis::Region => self.region_id,
            _ => None,
        }
    }
}

impl DimensionRefs for EventRow {
    fn reference(&self, axis: Axis) -> Option<Uuid> {
        match axis {
            Axis::EventCategory => Some(self.event_category_id),
            Axis::GroupCategory => Some(self.group_category_id),
            Axis::GroupRegion => self.group_region_id,
            _ => None,
        }
    }
}

impl DimensionRefs for AttendanceRow {
    fn reference(&self, axis: Axis) -> Option<Uuid> {
        match axis {
            Axis::EventCategory => Some(self.event_category_id),
            Axis::GroupCategory => Some(self.group_category_id),
            Axis::GroupRegion => self.group_region_id,
            _ => None,
        }
    }
}

/// Resolves dimension references against one community's reference tables
pub struct DimensionResolver<'a> {
    tables: &'a DimensionTables,
}

impl<'a> DimensionResolver<'a> {
    pub fn new(tables: &'a DimensionTables) -> Self {
        Self { tables }
    }

    fn table(&self, axis: Axis) -> &HashMap<Uuid, String> {
        match axis {
            Axis::Category | Axis::GroupCategory => &self.tables.group_categories,
            Axis::Region | Axis::GroupRegion => &self.tables.regions,
            Axis::EventCategory => &self.tables.event_categories,
        }
    }

    /// Display name for `row` on `axis`, or `None` when the row has no value
    pub fn resolve<R: DimensionRefs>(&self, row: &R, axis: Axis) -> Option<String> {
        let id = row.reference(axis)?;
        self.table(axis).get(&id).cloned()
    }
}
