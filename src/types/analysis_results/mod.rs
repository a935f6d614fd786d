//! Analysis result types and data structures

mod community_stats;

pub use community_stats::{
    Breakdown, CommunityStats, EventFamilyStats, GroupFamilyStats, PerMonthSeries,
    RunningTotalSeries, SeriesByLabel,
};
