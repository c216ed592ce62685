//! Property-based tests for points and levels
//!
//! Uses proptest to verify properties that should hold for all event sequences.

use chrono::{Duration, FixedOffset, NaiveDate};
use levelup::adapters::{FixedClock, InMemoryEventLog, PercentageLevelLookup};
use levelup::core::models::{AchievementRecord, IncomingEvent, LevelThreshold, PointRecord, SkillNode};
use levelup::core::services::accumulator::{bucket_day, points_to_create};
use levelup::core::services::evaluator::{AchievedOnResolver, LevelCheck, check_levels};
use proptest::prelude::*;

use crate::common::{LADDER, PROJECT, SKILL, USER, t0};

/// Feed a sequence of increments through the evaluator, keeping its output
fn run_sequence(increments: &[i64], total_points: i64) -> Vec<Vec<u32>> {
    let node = SkillNode::subject(2, "subj1", "Subject 1", total_points);
    let thresholds = LevelThreshold::ladder(node.ref_id, &LADDER);
    let latest = InMemoryEventLog::new();
    let clock = FixedClock::new(t0());

    let mut score = 0;
    let mut held: Vec<AchievementRecord> = Vec::new();
    let mut history = Vec::new();

    for &increment in increments {
        let event = IncomingEvent::at(USER, PROJECT, SKILL, t0());
        let resolver = AchievedOnResolver::new(&event, &latest, &clock);
        let check = LevelCheck {
            node: &node,
            user_id: USER,
            project_id: PROJECT,
            existing_score: score,
            increment,
            total_points,
            thresholds: &thresholds,
            existing_achievements: &held,
        };
        let new = check_levels(&check, &PercentageLevelLookup, &resolver).unwrap();
        score += increment;
        held.extend(new);
        history.push(held.iter().map(|a| a.level).collect());
    }
    history
}

proptest! {
    /// Achieved levels always form a prefix {1..K} and K never decreases
    #[test]
    fn achieved_levels_are_a_growing_prefix(
        increments in prop::collection::vec(1i64..60, 1..30),
        total_points in 50i64..500,
    ) {
        let history = run_sequence(&increments, total_points);
        let mut previous = 0;
        for levels in history {
            let k = u32::try_from(levels.len()).unwrap();
            prop_assert_eq!(levels, (1..=k).collect::<Vec<_>>());
            prop_assert!(k >= previous);
            previous = k;
        }
    }

    /// Any number of events on one calendar day leaves one daily record
    #[test]
    fn same_day_events_share_one_daily_record(
        minutes in prop::collection::vec(0i64..1440, 1..20),
    ) {
        let node = SkillNode::skill(1, SKILL, "Skill 1", 10, 100);
        let zone = FixedOffset::east_opt(0).unwrap();
        let midnight = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();

        let mut store: Vec<PointRecord> = Vec::new();
        for m in minutes {
            let day = bucket_day(midnight + Duration::minutes(m), zone);
            let created = points_to_create(&node, USER, PROJECT, day, 10, &store);
            store.extend(created);
        }

        prop_assert_eq!(store.iter().filter(|r| r.day.is_some()).count(), 1);
        prop_assert_eq!(store.iter().filter(|r| r.is_aggregate()).count(), 1);
    }
}
