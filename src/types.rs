//! Community Analytics Aggregation Engine - Type System
//!
//! - `entities`: Raw rows read from the entity store
//! - `dataset`: JSON import format for the entity store
//! - `facts`: Facts, axes and families the engine aggregates
//! - `analysis_results`: The community statistics document

pub mod analysis_results;
pub mod dataset;
pub mod entities;
pub mod facts;

pub use analysis_results::CommunityStats;
pub use facts::{AttendeeTimeBasis, Axis, Family, Fact};
