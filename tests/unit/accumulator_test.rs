//! Tests for point record creation across events

use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use levelup::core::models::{PointRecord, SkillNode};
use levelup::core::services::accumulator::{bucket_day, points_to_create};

use crate::common::{PROJECT, SKILL, USER, t0};

/// Apply an event the way storage would: insert new rows, bump existing ones
fn apply(store: &mut Vec<PointRecord>, node: &SkillNode, day: NaiveDate, increment: i64) {
    let created = points_to_create(node, USER, PROJECT, day, increment, store);
    for record in store.iter_mut() {
        let same_day = record.day.is_none() || record.day == Some(day);
        let fresh = created.iter().any(|c| c.day == record.day);
        if record.belongs_to(USER, node) && same_day && !fresh {
            record.points += increment;
        }
    }
    store.extend(created);
}

#[test]
fn test_two_events_same_day_share_daily_record() {
    let node = SkillNode::skill(1, SKILL, "Skill 1", 10, 100);
    let zone = FixedOffset::east_opt(0).unwrap();
    let mut store = Vec::new();

    apply(&mut store, &node, bucket_day(t0(), zone), 10);
    apply(&mut store, &node, bucket_day(t0() + Duration::hours(5), zone), 10);

    let daily: Vec<_> = store.iter().filter(|r| !r.is_aggregate()).collect();
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].points, 20);

    let aggregate: Vec<_> = store.iter().filter(|r| r.is_aggregate()).collect();
    assert_eq!(aggregate.len(), 1);
    assert_eq!(aggregate[0].points, 20);
}

#[test]
fn test_events_on_different_days_get_own_daily_records() {
    let node = SkillNode::skill(1, SKILL, "Skill 1", 10, 100);
    let zone = FixedOffset::east_opt(0).unwrap();
    let mut store = Vec::new();

    apply(&mut store, &node, bucket_day(t0(), zone), 10);
    apply(&mut store, &node, bucket_day(t0() + Duration::days(1), zone), 10);

    assert_eq!(store.iter().filter(|r| !r.is_aggregate()).count(), 2);
    assert_eq!(store.iter().filter(|r| r.is_aggregate()).count(), 1);
}

#[test]
fn test_project_root_records_have_no_skill_id() {
    let root = SkillNode::project(3, "Project 1", 1000);
    let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let created = points_to_create(&root, USER, PROJECT, day, 10, &[]);

    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|r| r.skill_id.is_none() && r.node_ref_id == 3));
}

#[test]
fn test_bucket_day_truncates_time() {
    let zone = FixedOffset::east_opt(0).unwrap();
    let morning = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let night = Utc.with_ymd_and_hms(2024, 5, 1, 23, 59, 59).unwrap();
    assert_eq!(bucket_day(morning, zone), bucket_day(night, zone));
}

#[test]
fn test_bucket_day_negative_offset_moves_to_previous_day() {
    let zone = FixedOffset::west_opt(5 * 3600).unwrap();
    let early = Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).unwrap();
    assert_eq!(bucket_day(early, zone), NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
}
