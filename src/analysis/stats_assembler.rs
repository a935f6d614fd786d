//! Community statistics assembly
//!
//! Runs the bucketing engine once per family inside a single read snapshot
//! and shapes the results into [`CommunityStats`].

use super::bucketing::{aggregate, Aggregation};
use super::fact_extractor::FactExtractor;
use crate::database::{CommunityReadOperations, Database};
use crate::errors::AppResult;
use crate::types::analysis_results::{CommunityStats, EventFamilyStats, GroupFamilyStats};
use crate::types::facts::{AttendeeTimeBasis, Axis, Family};
use tracing::info;
use uuid::Uuid;

/// Builds the statistics report for a community
pub struct CommunityStatsAnalyser;

impl CommunityStatsAnalyser {
    /// Build the report against one consistent snapshot of the store
    ///
    /// An unknown community is not an error: the result is
    /// `CommunityStats::default()`. Store failures abort the whole report.
    pub fn build_report(
        db: &Database,
        community_id: Uuid,
        attendee_time_basis: AttendeeTimeBasis,
    ) -> AppResult<CommunityStats> {
        let stats = db.with_read_snapshot(|conn| {
            Self::build_report_from(conn, community_id, attendee_time_basis)
        })?;

        info!(
            "Community {} stats: {} groups, {} members, {} events, {} attendees",
            community_id,
            stats.groups.total,
            stats.members.total,
            stats.events.total,
            stats.attendees.total
        );
        Ok(stats)
    }

    /// Build the report from any community read source
    pub fn build_report_from<S>(
        store: &S,
        community_id: Uuid,
        attendee_time_basis: AttendeeTimeBasis,
    ) -> AppResult<CommunityStats>
    where
        S: CommunityReadOperations + ?Sized,
    {
        let extractor = FactExtractor::load(store, community_id, attendee_time_basis)?;
        let run = |family: Family| -> AppResult<Aggregation> {
            let facts = extractor.extract(family)?;
            Ok(aggregate(&facts, family.axes()))
        };

        Ok(CommunityStats {
            groups: group_family_stats(run(Family::Groups)?),
            members: group_family_stats(run(Family::Members)?),
            events: event_family_stats(run(Family::Events)?),
            attendees: event_family_stats(run(Family::Attendees)?),
        })
    }
}

fn group_family_stats(mut agg: Aggregation) -> GroupFamilyStats {
    let category = agg.take_axis(Axis::Category);
    let region = agg.take_axis(Axis::Region);

    GroupFamilyStats {
        total: agg.total,
        total_by_category: category.breakdown,
        total_by_region: region.breakdown,
        running_total: agg.running_total,
        running_total_by_category: category.running_total_by_label,
        running_total_by_region: region.running_total_by_label,
        per_month: agg.per_month,
        per_month_by_category: category.per_month_by_label,
        per_month_by_region: region.per_month_by_label,
    }
}

fn event_family_stats(mut agg: Aggregation) -> EventFamilyStats {
    let event_category = agg.take_axis(Axis::EventCategory);
    let group_category = agg.take_axis(Axis::GroupCategory);
    let group_region = agg.take_axis(Axis::GroupRegion);

    EventFamilyStats {
        total: agg.total,
        total_by_event_category: event_category.breakdown,
        total_by_group_category: group_category.breakdown,
        total_by_group_region: group_region.breakdown,
        running_total: agg.running_total,
        running_total_by_event_category: event_category.running_total_by_label,
        running_total_by_group_category: group_category.running_total_by_label,
        running_total_by_group_region: group_region.running_total_by_label,
        per_month: agg.per_month,
        per_month_by_event_category: event_category.per_month_by_label,
        per_month_by_group_category: group_category.per_month_by_label,
        per_month_by_group_region: group_region.per_month_by_label,
    }
}
