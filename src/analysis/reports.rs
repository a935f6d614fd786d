//! Report formatting and output generation
//!
//! Console output is a compact human-readable summary using `label|count`
//! lines; JSON output is the full statistics document.

use crate::database::StoreStats;
use crate::errors::AppResult;
use crate::types::analysis_results::{
    Breakdown, CommunityStats, EventFamilyStats, GroupFamilyStats, PerMonthSeries,
};
use serde::Serialize;
use std::str::FromStr;

/// Output format options for analysis reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Console,
    /// JSON format for programmatic use
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}' (expected console or json)",
                other
            )),
        }
    }
}

/// Report formatter for analysis results
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format number with thousand separators for console output
    ///
    /// # Examples
    ///
    /// ```
    /// # use community_stats::analysis::ReportFormatter;
    /// assert_eq!(ReportFormatter::format_number(1234), "1,234");
    /// assert_eq!(ReportFormatter::format_number(1234567), "1,234,567");
    /// assert_eq!(ReportFormatter::format_number(904), "904");
    /// ```
    pub fn format_number(n: u64) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let chars: Vec<char> = s.chars().collect();

        for (i, c) in chars.iter().enumerate() {
            if i > 0 && (chars.len() - i) % 3 == 0 {
                result.push(',');
            }
            result.push(*c);
        }

        result
    }

    /// Format the community statistics report
    pub fn format_community_stats(
        stats: &CommunityStats,
        format: &OutputFormat,
    ) -> AppResult<String> {
        match format {
            OutputFormat::Console => {
                let mut output = String::new();
                Self::push_group_family(&mut output, "Groups", &stats.groups);
                Self::push_group_family(&mut output, "Members", &stats.members);
                Self::push_event_family(&mut output, "Events", &stats.events);
                Self::push_event_family(&mut output, "Attendees", &stats.attendees);
                Ok(output)
            }
            OutputFormat::Json => Self::export_json(stats),
        }
    }

    /// Format store row counts (shown after an import)
    pub fn format_store_stats(stats: &StoreStats, format: &OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Console => Ok(format!(
                "Communities: {}\n\
                 Group categories: {}\n\
                 Regions: {}\n\
                 Event categories: {}\n\
                 Users: {}\n\
                 Groups: {} ({} deleted)\n\
                 Group members: {}\n\
                 Events: {} ({} published)\n\
                 Event attendees: {}\n",
                stats.communities,
                stats.group_categories,
                stats.regions,
                stats.event_categories,
                stats.users,
                stats.groups,
                stats.deleted_groups,
                stats.group_members,
                stats.events,
                stats.published_events,
                stats.event_attendees
            )),
            OutputFormat::Json => Self::export_json(stats),
        }
    }

    pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    fn push_group_family(output: &mut String, title: &str, stats: &GroupFamilyStats) {
        output.push_str(&format!(
            "{}: {}\n",
            title,
            Self::format_number(stats.total)
        ));
        Self::push_breakdown(output, "By category", &stats.total_by_category);
        Self::push_breakdown(output, "By region", &stats.total_by_region);
        Self::push_activity(output, &stats.per_month);
        output.push('\n');
    }

    fn push_event_family(output: &mut String, title: &str, stats: &EventFamilyStats) {
        output.push_str(&format!(
            "{}: {}\n",
            title,
            Self::format_number(stats.total)
        ));
        Self::push_breakdown(output, "By event category", &stats.total_by_event_category);
        Self::push_breakdown(output, "By group category", &stats.total_by_group_category);
        Self::push_breakdown(output, "By group region", &stats.total_by_group_region);
        Self::push_activity(output, &stats.per_month);
        output.push('\n');
    }

    fn push_breakdown(output: &mut String, heading: &str, breakdown: &Breakdown) {
        if breakdown.is_empty() {
            return;
        }
        output.push_str(&format!("  {}:\n", heading));
        for (label, count) in breakdown {
            output.push_str(&format!("    {}|{}\n", label, count));
        }
    }

    fn push_activity(output: &mut String, per_month: &PerMonthSeries) {
        if let (Some((first, _)), Some((last, _))) = (per_month.first(), per_month.last()) {
            let busiest = per_month
                .iter()
                .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
                .map(|(month, count)| format!("{} ({})", month, count))
                .unwrap_or_default();
            output.push_str(&format!(
                "  Active months: {} ({} to {}), busiest {}\n",
                per_month.len(),
                first,
                last,
                busiest
            ));
        }
    }
}
