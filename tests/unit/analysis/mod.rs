//! Analysis module unit tests

pub mod group_stats;
pub mod member_stats;
