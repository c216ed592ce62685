//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use levelup::config::EngineSettings;
use levelup::core::models::IncomingEvent;
use levelup::core::services::{GateDecision, MAX_POINTS_REACHED, SkillEventResult};
use levelup::output::{GateReport, IntervalReport, OutputMode, ProcessReport};

use crate::common::{HierarchyBuilder, PROJECT, SKILL, USER, event_log, process_with, t0};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// ProcessReport Tests
// =============================================================================

fn applied_report() -> ProcessReport {
    let snapshot = HierarchyBuilder::new().increment(20).build();
    let event = IncomingEvent::at(USER, PROJECT, SKILL, t0());
    let result = process_with(&event, &snapshot, &event_log(), t0(), EngineSettings::default()).unwrap();
    ProcessReport {
        skill_id: SKILL.to_string(),
        user_id: USER.to_string(),
        result,
    }
}

#[test]
fn process_report_serialization_is_flat() {
    let json = serde_json::to_value(applied_report()).unwrap();
    assert_eq!(json["skill_id"], "s1");
    assert_eq!(json["skill_applied"], true);
    assert!(json.get("explanation").is_none());
    assert_eq!(json["outcome"]["points_earned"], 20);
    assert_eq!(json["outcome"]["notices"][0]["kind"], "Subject");
    assert_eq!(json["outcome"]["notices"][0]["level"], 1);
}

#[test]
fn process_report_human_lists_levels() {
    let text = applied_report().to_human();
    assert!(text.contains("Applied: s1 for u1 (+20 points)"));
    assert!(text.contains("[Subject] Subject 1 - level 1"));
    assert!(text.contains("<project>"));
}

#[test]
fn process_report_human_not_applied() {
    let report = ProcessReport {
        skill_id: SKILL.to_string(),
        user_id: USER.to_string(),
        result: SkillEventResult::not_applied(MAX_POINTS_REACHED),
    };
    let text = report.to_human();
    assert!(text.starts_with("Not applied: s1 for u1"));
    assert!(text.contains(MAX_POINTS_REACHED));
}

// =============================================================================
// Other Reports
// =============================================================================

#[test]
fn gate_report_carries_reason() {
    let report = GateReport::new(SKILL, GateDecision::reject("already performed within the last 1 hour"));
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"admitted\":false"));
    assert!(json.contains("within the last 1 hour"));

    let admitted = serde_json::to_string(&GateReport::new(SKILL, GateDecision::ADMIT)).unwrap();
    assert!(!admitted.contains("reason"));
}

#[test]
fn interval_report_serialization() {
    let report = IntervalReport {
        minutes: 90,
        pretty: "1 hour 30 minutes".to_string(),
    };
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"minutes\":90"));
    assert!(json.contains("1 hour 30 minutes"));
}
