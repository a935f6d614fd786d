//! Unit tests for the members family of the community report

use crate::common::community_seeding::CommunitySeed;
use crate::common::{create_stats_test_db, month_millis, ts};
use community_stats::analysis::StatsEngine;
use community_stats::errors::AppResult;

#[test]
fn test_eight_members_eight_months() -> AppResult<()> {
    let mut db = create_stats_test_db()?;
    let mut seed = CommunitySeed::new("cncf");
    let ai = seed.group_category("AI/ML");
    let cloud = seed.group_category("Cloud Native");
    let europe = seed.region("Europe");

    let groups = [
        seed.group(ai, Some(europe), ts(2023, 1, 1)),
        seed.group(ai, None, ts(2023, 1, 2)),
        seed.group(cloud, Some(europe), ts(2023, 1, 3)),
        seed.group(cloud, None, ts(2023, 1, 4)),
    ];
    for month in 1..=8u32 {
        let user = seed.user();
        let group = groups[(month as usize - 1) % groups.len()];
        seed.member(group, user, ts(2023, month + 2, 15));
    }
    let community_id = seed.seed(&mut db)?;

    let stats = StatsEngine::from_database(db).community_stats(community_id)?;
    let members = &stats.members;

    assert_eq!(members.total, 8);
    assert_eq!(members.per_month.len(), 8);
    assert!(members.per_month.iter().all(|(_, count)| *count == 1));
    assert_eq!(members.per_month[0].0, "2023-03");
    assert_eq!(members.per_month[7].0, "2023-10");
    assert_eq!(members.running_total.last(), Some(&(month_millis(2023, 10), 8)));

    assert_eq!(
        members.total_by_category,
        vec![("AI/ML".to_string(), 4), ("Cloud Native".to_string(), 4)]
    );
    // Only groups with a region contribute to the region axis
    assert_eq!(members.total_by_region, vec![("Europe".to_string(), 4)]);

    Ok(())
}

#[test]
fn test_members_of_deleted_group_excluded() -> AppResult<()> {
    let mut db = create_stats_test_db()?;
    let mut seed = CommunitySeed::new("python");
    let web = seed.group_category("Web");

    let live = seed.group(web, None, ts(2023, 1, 1));
    let gone = seed.deleted_group(web, None, ts(2023, 1, 1));
    let (alice, bob) = (seed.user(), seed.user());
    seed.member(live, alice, ts(2023, 2, 1));
    seed.member(gone, bob, ts(2023, 3, 1));
    seed.member(gone, alice, ts(2023, 4, 1));
    let community_id = seed.seed(&mut db)?;

    let stats = StatsEngine::from_database(db).community_stats(community_id)?;

    assert_eq!(stats.members.total, 1);
    assert_eq!(stats.members.per_month, vec![("2023-02".to_string(), 1)]);
    assert_eq!(
        stats.members.running_total_by_category["Web"],
        vec![(month_millis(2023, 2), 1)]
    );

    Ok(())
}

#[test]
fn test_members_bucketed_by_join_not_group_creation() -> AppResult<()> {
    let mut db = create_stats_test_db()?;
    let mut seed = CommunitySeed::new("rust");
    let systems = seed.group_category("Systems");

    let group = seed.group(systems, None, ts(2021, 5, 1));
    let user = seed.user();
    seed.member(group, user, ts(2022, 9, 30));
    let community_id = seed.seed(&mut db)?;

    let stats = StatsEngine::from_database(db).community_stats(community_id)?;

    assert_eq!(stats.groups.per_month, vec![("2021-05".to_string(), 1)]);
    assert_eq!(stats.members.per_month, vec![("2022-09".to_string(), 1)]);

    Ok(())
}
