//! Community analytics aggregation engine
//!
//! ## Overview
//!
//! Data flows one way through four stages:
//!
//! - **Fact extraction** - eligible rows of a community become timestamped facts
//! - **Dimension resolution** - category/region ids become display labels
//! - **Bucketing** - totals, breakdowns and sparse monthly series
//! - **Assembly** - the four families shaped into one [`CommunityStats`] document
//!
//! Nothing is cached between calls and nothing is written to the store.
//!
//! ## Usage
//!
//! ```rust
//! use community_stats::analysis::{OutputFormat, ReportFormatter, StatsEngine};
//! use community_stats::errors::AppResult;
//!
//! fn example() -> AppResult<()> {
//!     let engine = StatsEngine::new(":memory:")?;
//!     let community_id = uuid::Uuid::new_v4();
//!
//!     let stats = engine.community_stats(community_id)?;
//!     assert_eq!(stats.groups.total, 0);
//!
//!     let json = ReportFormatter::format_community_stats(&stats, &OutputFormat::Json)?;
//!     assert!(json.contains("\"attendees\""));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod bucketing;
pub mod dimension_resolver;
pub mod fact_extractor;
pub mod reports;
pub mod stats_assembler;

pub use bucketing::{aggregate, Aggregation, AxisAggregation, Series};
pub use dimension_resolver::{DimensionRefs, DimensionResolver};
pub use fact_extractor::FactExtractor;
pub use reports::{OutputFormat, ReportFormatter};
pub use stats_assembler::CommunityStatsAnalyser;

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::types::analysis_results::CommunityStats;
use crate::types::facts::AttendeeTimeBasis;
use uuid::Uuid;

/// Parse a community identifier supplied by a caller
///
/// Malformed input is a request-validation failure, distinct from a
/// well-formed id that matches no community (which yields an empty report).
pub fn parse_community_id(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value.trim()).map_err(|e| AppError::InvalidIdentifier {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Main statistics engine over an entity store
pub struct StatsEngine {
    database: Database,
    attendee_time_basis: AttendeeTimeBasis,
}

impl StatsEngine {
    /// Create a new engine with the specified database
    ///
    /// # Arguments
    /// * `database_path` - Path to the SQLite database file (or `":memory:"`)
    pub fn new(database_path: &str) -> AppResult<Self> {
        let database = Database::new(database_path)?;
        Ok(Self::from_database(database))
    }

    /// Wrap an already opened database
    pub fn from_database(database: Database) -> Self {
        Self {
            database,
            attendee_time_basis: AttendeeTimeBasis::default(),
        }
    }

    /// Choose which instant attendee facts are bucketed by
    pub fn with_attendee_time_basis(mut self, basis: AttendeeTimeBasis) -> Self {
        self.attendee_time_basis = basis;
        self
    }

    /// Statistics for the complete history of one community
    pub fn community_stats(&self, community_id: Uuid) -> AppResult<CommunityStats> {
        CommunityStatsAnalyser::build_report(
            &self.database,
            community_id,
            self.attendee_time_basis,
        )
    }
}
