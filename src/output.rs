//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::services::{GateDecision, SkillEventResult};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of processing one event
#[derive(Debug, Serialize)]
pub struct ProcessReport {
    /// Skill the event was for
    pub skill_id: String,
    /// User who performed it
    pub user_id: String,
    /// Pipeline result
    #[serde(flatten)]
    pub result: SkillEventResult,
}

/// Result of a dedup gate check
#[derive(Debug, Serialize)]
pub struct GateReport {
    /// Skill checked
    pub skill_id: String,
    /// Whether the event would be admitted
    pub admitted: bool,
    /// Explanation when rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A pretty-printed interval
#[derive(Debug, Serialize)]
pub struct IntervalReport {
    /// Interval in minutes
    pub minutes: i64,
    /// Rendered interval
    pub pretty: String,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl ProcessReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        if !self.result.skill_applied {
            out.push_str(&format!("Not applied: {} for {}\n", self.skill_id, self.user_id));
            if let Some(reason) = &self.result.explanation {
                out.push_str(&format!("  {reason}\n"));
            }
            return out;
        }

        let outcome = &self.result.outcome;
        out.push_str(&format!(
            "Applied: {} for {} (+{} points)\n",
            self.skill_id, self.user_id, outcome.points_earned
        ));

        if !outcome.points_to_create.is_empty() {
            out.push_str("\nNew point records:\n");
            for record in &outcome.points_to_create {
                let node = record.skill_id.as_deref().unwrap_or("<project>");
                match record.day {
                    Some(day) => out.push_str(&format!("  {node:<20} {day}  {}\n", record.points)),
                    None => out.push_str(&format!("  {node:<20} total       {}\n", record.points)),
                }
            }
        }

        if outcome.notices.is_empty() {
            out.push_str("\nNo new levels.\n");
        } else {
            out.push_str("\nLevels reached:\n");
            for notice in &outcome.notices {
                out.push_str(&format!("  [{}] {} - level {}\n", notice.kind, notice.name, notice.level));
            }
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl GateReport {
    /// Build a report from a gate decision
    #[must_use]
    pub fn new(skill_id: &str, decision: GateDecision) -> Self {
        Self {
            skill_id: skill_id.to_string(),
            admitted: decision.admitted,
            reason: decision.reason,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.admitted {
                    println!("Admitted: {}", self.skill_id);
                } else {
                    println!("Rejected: {}", self.skill_id);
                    if let Some(reason) = &self.reason {
                        println!("  {reason}");
                    }
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl IntervalReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.pretty),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
