//! Unit tests for the groups family of the community report

use crate::common::community_seeding::CommunitySeed;
use crate::common::{create_stats_test_db, month_millis, ts};
use community_stats::analysis::StatsEngine;
use community_stats::errors::AppResult;

#[test]
fn test_four_groups_two_categories() -> AppResult<()> {
    let mut db = create_stats_test_db()?;
    let mut seed = CommunitySeed::new("cncf");
    let ai = seed.group_category("AI/ML");
    let cloud = seed.group_category("Cloud Native");
    let europe = seed.region("Europe");
    let america = seed.region("North America");

    seed.group(ai, Some(europe), ts(2023, 1, 10));
    seed.group(ai, Some(america), ts(2023, 2, 10));
    seed.group(cloud, Some(europe), ts(2023, 3, 10));
    seed.group(cloud, Some(america), ts(2023, 4, 10));
    let community_id = seed.seed(&mut db)?;

    let stats = StatsEngine::from_database(db).community_stats(community_id)?;
    let groups = &stats.groups;

    assert_eq!(groups.total, 4);
    assert_eq!(
        groups.total_by_category,
        vec![("AI/ML".to_string(), 2), ("Cloud Native".to_string(), 2)]
    );
    assert_eq!(
        groups.total_by_region,
        vec![("Europe".to_string(), 2), ("North America".to_string(), 2)]
    );
    assert_eq!(groups.running_total.len(), 4);
    assert_eq!(groups.running_total.last(), Some(&(month_millis(2023, 4), 4)));
    assert_eq!(
        groups.running_total_by_region["Europe"],
        vec![(month_millis(2023, 1), 1), (month_millis(2023, 3), 2)]
    );
    assert_eq!(
        groups.per_month_by_category["Cloud Native"],
        vec![("2023-03".to_string(), 1), ("2023-04".to_string(), 1)]
    );

    Ok(())
}

#[test]
fn test_same_category_same_month_single_point() -> AppResult<()> {
    let mut db = create_stats_test_db()?;
    let mut seed = CommunitySeed::new("rust");
    let systems = seed.group_category("Systems");

    seed.group(systems, None, ts(2024, 2, 3));
    seed.group(systems, None, ts(2024, 2, 27));
    let community_id = seed.seed(&mut db)?;

    let stats = StatsEngine::from_database(db).community_stats(community_id)?;

    assert_eq!(
        stats.groups.running_total_by_category["Systems"],
        vec![(month_millis(2024, 2), 2)]
    );
    assert_eq!(
        stats.groups.per_month_by_category["Systems"],
        vec![("2024-02".to_string(), 2)]
    );
    assert_eq!(stats.groups.running_total, vec![(month_millis(2024, 2), 2)]);

    Ok(())
}

#[test]
fn test_deleted_groups_excluded() -> AppResult<()> {
    let mut db = create_stats_test_db()?;
    let mut seed = CommunitySeed::new("python");
    let web = seed.group_category("Web");
    let data = seed.group_category("Data");

    seed.group(web, None, ts(2023, 6, 1));
    seed.deleted_group(data, None, ts(2023, 7, 1));
    let community_id = seed.seed(&mut db)?;

    let stats = StatsEngine::from_database(db).community_stats(community_id)?;

    assert_eq!(stats.groups.total, 1);
    assert_eq!(stats.groups.total_by_category, vec![("Web".to_string(), 1)]);
    assert!(!stats.groups.running_total_by_category.contains_key("Data"));
    assert_eq!(stats.groups.per_month, vec![("2023-06".to_string(), 1)]);

    Ok(())
}

#[test]
fn test_region_is_optional() -> AppResult<()> {
    let mut db = create_stats_test_db()?;
    let mut seed = CommunitySeed::new("go");
    let backend = seed.group_category("Backend");
    let asia = seed.region("Asia");

    seed.group(backend, Some(asia), ts(2022, 11, 1));
    seed.group(backend, None, ts(2022, 12, 1));
    seed.group(backend, None, ts(2023, 1, 1));
    let community_id = seed.seed(&mut db)?;

    let stats = StatsEngine::from_database(db).community_stats(community_id)?;
    let groups = &stats.groups;

    let category_sum: u64 = groups.total_by_category.iter().map(|(_, c)| c).sum();
    let region_sum: u64 = groups.total_by_region.iter().map(|(_, c)| c).sum();
    assert_eq!(category_sum, groups.total);
    assert_eq!(region_sum, 1);
    assert!(region_sum <= groups.total);

    assert_eq!(groups.total_by_region, vec![("Asia".to_string(), 1)]);
    assert_eq!(groups.running_total_by_region.len(), 1);
    assert_eq!(groups.per_month_by_region.len(), 1);

    Ok(())
}

#[test]
fn test_series_cross_year_boundary() -> AppResult<()> {
    let mut db = create_stats_test_db()?;
    let mut seed = CommunitySeed::new("kotlin");
    let mobile = seed.group_category("Mobile");

    seed.group(mobile, None, ts(2023, 12, 31));
    seed.group(mobile, None, ts(2024, 1, 1));
    let community_id = seed.seed(&mut db)?;

    let stats = StatsEngine::from_database(db).community_stats(community_id)?;

    assert_eq!(
        stats.groups.per_month,
        vec![("2023-12".to_string(), 1), ("2024-01".to_string(), 1)]
    );
    assert_eq!(
        stats.groups.running_total,
        vec![(month_millis(2023, 12), 1), (month_millis(2024, 1), 2)]
    );

    Ok(())
}
