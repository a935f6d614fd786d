//! Community statistics report types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `(label, count)` pairs sorted by label; serialised as `[label, count]`
pub type Breakdown = Vec<(String, u64)>;

/// `(month_start_epoch_millis, cumulative_count)` points in month order
pub type RunningTotalSeries = Vec<(i64, u64)>;

/// `("YYYY-MM", count_in_month)` points in month order
pub type PerMonthSeries = Vec<(String, u64)>;

/// Per-label series keyed by the label's display name
pub type SeriesByLabel<S> = BTreeMap<String, S>;

/// Statistics for the complete history of one community
///
/// The document shape never changes: an unknown community yields
/// `CommunityStats::default()`, with every total 0 and every list/map empty.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityStats {
    pub groups: GroupFamilyStats,
    pub members: GroupFamilyStats,
    pub events: EventFamilyStats,
    pub attendees: EventFamilyStats,
}

/// Groups and members, broken down by the group's category and region
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupFamilyStats {
    pub total: u64,
    pub total_by_category: Breakdown,
    pub total_by_region: Breakdown,

    pub running_total: RunningTotalSeries,
    pub running_total_by_category: SeriesByLabel<RunningTotalSeries>,
    pub running_total_by_region: SeriesByLabel<RunningTotalSeries>,

    pub per_month: PerMonthSeries,
    pub per_month_by_category: SeriesByLabel<PerMonthSeries>,
    pub per_month_by_region: SeriesByLabel<PerMonthSeries>,
}

/// Events and attendees, broken down by event category and by the hosting
/// group's category and region
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFamilyStats {
    pub total: u64,
    pub total_by_event_category: Breakdown,
    pub total_by_group_category: Breakdown,
    pub total_by_group_region: Breakdown,

    pub running_total: RunningTotalSeries,
    pub running_total_by_event_category: SeriesByLabel<RunningTotalSeries>,
    pub running_total_by_group_category: SeriesByLabel<RunningTotalSeries>,
    pub running_total_by_group_region: SeriesByLabel<RunningTotalSeries>,

    pub per_month: PerMonthSeries,
    pub per_month_by_event_category: SeriesByLabel<PerMonthSeries>,
    pub per_month_by_group_category: SeriesByLabel<PerMonthSeries>,
    pub per_month_by_group_region: SeriesByLabel<PerMonthSeries>,
}

impl CommunityStats {
    /// True when no family has a single fact
    pub fn is_empty(&self) -> bool {
        self.groups.total == 0
            && self.members.total == 0
            && self.events.total == 0
            && self.attendees.total == 0
    }
}
