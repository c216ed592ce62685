//! Tests for the time window gate against a real event history

use chrono::Duration;
use levelup::EngineError;
use levelup::core::models::SkillNode;
use levelup::core::services::time_window::{GateDecision, evaluate};

use crate::common::{FailingCounter, PROJECT, SKILL, SUBJECT, USER, event_log, t0};

fn windowed(minutes: i64, max: i64) -> SkillNode {
    SkillNode::skill(1, SKILL, "Skill 1", 10, 100).with_window(minutes, max)
}

// =============================================================================
// WINDOW BOUNDARY TESTS
// =============================================================================

#[test]
fn test_event_exactly_one_interval_later_is_admitted() {
    let mut log = event_log();
    log.record(USER, PROJECT, SKILL, t0());

    let decision = evaluate(&windowed(10, 1), USER, t0() + Duration::minutes(10), &log).unwrap();
    assert_eq!(decision, GateDecision::ADMIT);
}

#[test]
fn test_event_just_inside_interval_is_rejected() {
    let mut log = event_log();
    log.record(USER, PROJECT, SKILL, t0());

    let at = t0() + Duration::minutes(9) + Duration::seconds(59);
    let decision = evaluate(&windowed(10, 1), USER, at, &log).unwrap();
    assert!(!decision.admitted);
    assert_eq!(decision.reason.as_deref(), Some("already performed within the last 10 minutes"));
}

#[test]
fn test_window_is_symmetric() {
    let mut log = event_log();
    log.record(USER, PROJECT, SKILL, t0());

    let before = t0() - Duration::minutes(9);
    assert!(!evaluate(&windowed(10, 1), USER, before, &log).unwrap().admitted);

    let well_before = t0() - Duration::minutes(10);
    assert!(evaluate(&windowed(10, 1), USER, well_before, &log).unwrap().admitted);
}

// =============================================================================
// OCCURRENCE LIMIT TESTS
// =============================================================================

#[test]
fn test_multiple_occurrences_allowed_until_limit() {
    let mut log = event_log();
    log.record(USER, PROJECT, SKILL, t0());

    let node = windowed(60, 2);
    let at = t0() + Duration::minutes(5);
    assert!(evaluate(&node, USER, at, &log).unwrap().admitted);

    log.record(USER, PROJECT, SKILL, at);
    let decision = evaluate(&node, USER, t0() + Duration::minutes(10), &log).unwrap();
    assert!(!decision.admitted);
    assert_eq!(decision.reason.as_deref(), Some("already performed within the last 1 hour"));
}

#[test]
fn test_other_users_do_not_count() {
    let mut log = event_log();
    log.record("u2", PROJECT, SKILL, t0());

    assert!(evaluate(&windowed(60, 1), USER, t0(), &log).unwrap().admitted);
}

#[test]
fn test_other_skills_do_not_count() {
    let mut log = event_log().with_membership("s2", SUBJECT);
    log.record(USER, PROJECT, "s2", t0());

    assert!(evaluate(&windowed(60, 1), USER, t0(), &log).unwrap().admitted);
}

#[test]
fn test_zero_max_occurrences_still_needs_a_prior_event() {
    let log = event_log();
    assert!(evaluate(&windowed(60, 0), USER, t0(), &log).unwrap().admitted);

    let mut log = event_log();
    log.record(USER, PROJECT, SKILL, t0());
    assert!(!evaluate(&windowed(60, 0), USER, t0(), &log).unwrap().admitted);
}

// =============================================================================
// ERROR PROPAGATION
// =============================================================================

#[test]
fn test_counter_failure_propagates() {
    let err = evaluate(&windowed(60, 1), USER, t0(), &FailingCounter).unwrap_err();
    assert!(err.to_string().contains("history unavailable"));
}

#[test]
fn test_disabled_window_ignores_failing_counter() {
    let decision = evaluate(&windowed(0, 1), USER, t0(), &FailingCounter).unwrap();
    assert!(decision.admitted);

    let negative = evaluate(&windowed(-5, 1), USER, t0(), &FailingCounter).unwrap();
    assert!(negative.admitted);
}

#[test]
fn test_out_of_range_interval_is_configuration_error() {
    let log = event_log();

    let huge = evaluate(&windowed(1_000_000_000_000, 1), USER, t0(), &log).unwrap_err();
    assert!(matches!(huge, EngineError::Configuration(_)));
    assert!(huge.to_string().contains("dedup interval 1000000000000 is out of range"));

    let max = evaluate(&windowed(i64::MAX, 1), USER, t0(), &FailingCounter).unwrap_err();
    assert!(matches!(max, EngineError::Configuration(_)));
}
