//! Monthly bucketing engine
//!
//! One routine serves all four families. Given facts and the axes relevant to
//! their family it produces:
//!
//! - **total**: number of facts
//! - **breakdown**: per axis, `(label, count)` for every label that occurs,
//!   sorted by label
//! - **running total**: `(month_start_millis, cumulative)` for every month
//!   with at least one fact
//! - **per month**: `("YYYY-MM", count)` for every month with at least one fact
//!
//! Series are sparse: a month without facts emits no point. Per-label series
//! are computed on the label's own sub-population, so each label has its own
//! month list and a cumulative counter starting at zero.

use crate::types::analysis_results::{
    Breakdown, PerMonthSeries, RunningTotalSeries, SeriesByLabel,
};
use crate::types::facts::{Axis, Fact};
use crate::utils::time::MonthBucket;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Running-total and per-month series for one population
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Series {
    pub running_total: RunningTotalSeries,
    pub per_month: PerMonthSeries,
}

impl Series {
    /// Bucket instants by UTC month and derive both series
    pub fn from_instants<'a, I>(instants: I) -> Self
    where
        I: IntoIterator<Item = &'a DateTime<Utc>>,
    {
        let mut counts: BTreeMap<MonthBucket, u64> = BTreeMap::new();
        for instant in instants {
            *counts.entry(MonthBucket::from_instant(instant)).or_insert(0) += 1;
        }

        let mut cumulative = 0u64;
        let running_total = counts
            .iter()
            .map(|(month, count)| {
                cumulative += count;
                (month.start_millis(), cumulative)
            })
            .collect();
        let per_month = counts
            .iter()
            .map(|(month, count)| (month.label(), *count))
            .collect();

        Self {
            running_total,
            per_month,
        }
    }
}

/// Breakdown and per-label series along one axis
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AxisAggregation {
    pub breakdown: Breakdown,
    pub running_total_by_label: SeriesByLabel<RunningTotalSeries>,
    pub per_month_by_label: SeriesByLabel<PerMonthSeries>,
}

/// Everything the engine computes for one family
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Aggregation {
    pub total: u64,
    pub running_total: RunningTotalSeries,
    pub per_month: PerMonthSeries,
    pub axes: BTreeMap<Axis, AxisAggregation>,
}

impl Aggregation {
    /// Remove and return one axis; an axis that was not requested is empty
    pub fn take_axis(&mut self, axis: Axis) -> AxisAggregation {
        self.axes.remove(&axis).unwrap_or_default()
    }
}

/// Aggregate facts overall and along each of `axes`
pub fn aggregate(facts: &[Fact], axes: &[Axis]) -> Aggregation {
    let overall = Series::from_instants(facts.iter().map(|fact| &fact.timestamp));

    Aggregation {
        total: facts.len() as u64,
        running_total: overall.running_total,
        per_month: overall.per_month,
        axes: axes
            .iter()
            .map(|&axis| (axis, aggregate_axis(facts, axis)))
            .collect(),
    }
}

fn aggregate_axis(facts: &[Fact], axis: Axis) -> AxisAggregation {
    // Facts without a value on this axis do not form a bucket
    let mut by_label: BTreeMap<&str, Vec<&DateTime<Utc>>> = BTreeMap::new();
    for fact in facts {
        if let Some(label) = fact.label(axis) {
            by_label.entry(label).or_default().push(&fact.timestamp);
        }
    }

    let mut result = AxisAggregation::default();
    for (label, instants) in by_label {
        result
            .breakdown
            .push((label.to_string(), instants.len() as u64));

        let series = Series::from_instants(instants);
        result
            .running_total_by_label
            .insert(label.to_string(), series.running_total);
        result
            .per_month_by_label
            .insert(label.to_string(), series.per_month);
    }
    result
}
