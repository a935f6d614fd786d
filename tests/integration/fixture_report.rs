//! Fixture Report Test
//!
//! Imports `tests/fixtures/community_dataset.json` into a fresh database and
//! compares the report for the main community against the hand-checked
//! expected document in `tests/fixtures/community_stats_expected.json`.
//!
//! The dataset also carries a second community, a soft-deleted group, a draft
//! event and a canceled event, none of which may leak into the report.

use community_stats::analysis::{parse_community_id, ReportFormatter, StatsEngine};
use community_stats::database::{Database, DatasetOperations, StatisticsOperations};
use community_stats::errors::AppResult;
use community_stats::types::dataset::Dataset;

use crate::common::{create_stats_test_db, fixture_path};

const MAIN_COMMUNITY: &str = "11111111-1111-1111-1111-111111111111";
const OTHER_COMMUNITY: &str = "22222222-2222-2222-2222-222222222222";

fn load_fixture_db() -> AppResult<Database> {
    let contents = std::fs::read_to_string(fixture_path("community_dataset.json"))?;
    let dataset = Dataset::from_json(&contents)?;
    let mut db = create_stats_test_db()?;
    let inserted = db.import_dataset(&dataset)?;
    assert_eq!(inserted, dataset.row_count());
    Ok(db)
}

#[test]
fn test_fixture_import_counts() -> AppResult<()> {
    let db = load_fixture_db()?;
    let stats = db.get_store_stats()?;

    assert_eq!(stats.communities, 2);
    assert_eq!(stats.groups, 6);
    assert_eq!(stats.deleted_groups, 1);
    assert_eq!(stats.group_members, 11);
    assert_eq!(stats.events, 9);
    assert_eq!(stats.published_events, 7);
    assert_eq!(stats.event_attendees, 15);

    Ok(())
}

#[test]
fn test_fixture_report_matches_expected() -> AppResult<()> {
    let engine = StatsEngine::from_database(load_fixture_db()?);
    let stats = engine.community_stats(parse_community_id(MAIN_COMMUNITY)?)?;

    let actual = serde_json::to_value(&stats)?;
    let expected: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
        fixture_path("community_stats_expected.json"),
    )?)?;

    for family in ["groups", "members", "events", "attendees"] {
        assert_eq!(actual[family], expected[family], "family {} differs", family);
    }
    assert_eq!(actual, expected);

    Ok(())
}

#[test]
fn test_fixture_report_scenarios() -> AppResult<()> {
    let engine = StatsEngine::from_database(load_fixture_db()?);
    let stats = engine.community_stats(parse_community_id(MAIN_COMMUNITY)?)?;

    assert_eq!(stats.groups.total, 4);
    assert_eq!(stats.groups.running_total.len(), 4);
    assert_eq!(stats.members.total, 8);
    assert_eq!(stats.members.per_month.len(), 8);
    assert_eq!(stats.events.total, 6);
    assert_eq!(stats.attendees.total, 11);
    assert_eq!(stats.attendees.running_total.last().map(|p| p.1), Some(11));

    Ok(())
}

#[test]
fn test_fixture_report_is_byte_identical() -> AppResult<()> {
    let engine = StatsEngine::from_database(load_fixture_db()?);
    let community_id = parse_community_id(MAIN_COMMUNITY)?;

    let first = ReportFormatter::export_json(&engine.community_stats(community_id)?)?;
    let second = ReportFormatter::export_json(&engine.community_stats(community_id)?)?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_fixture_second_community_isolated() -> AppResult<()> {
    let engine = StatsEngine::from_database(load_fixture_db()?);
    let stats = engine.community_stats(parse_community_id(OTHER_COMMUNITY)?)?;

    assert_eq!(stats.groups.total, 1);
    assert_eq!(stats.members.total, 2);
    assert_eq!(stats.events.total, 1);
    assert_eq!(stats.attendees.total, 1);
    assert_eq!(stats.groups.total_by_category, vec![("AI/ML".to_string(), 1)]);
    assert_eq!(stats.events.total_by_event_category, vec![("Meetup".to_string(), 1)]);

    Ok(())
}
