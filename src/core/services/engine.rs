//! Event pipeline - gate, guard, assemble
//!
//! `(event, snapshot, collaborators) -> result` with no state carried between
//! calls. A rejected event is a normal result with an explanation, not an error.

use log::info;
use serde::Serialize;

use super::assembler::{Collaborators, EventOutcome, assemble};
use super::time_window;
use crate::config::EngineSettings;
use crate::core::models::{CompletionNotice, IncomingEvent, LoadedSnapshot, aggregate_points};
use crate::core::ports::OccurrenceCounter;
use crate::error::Result;

/// Explanation given when a skill has no points left to earn
pub const MAX_POINTS_REACHED: &str = "This skill reached its maximum points";

/// Collaborators for the full pipeline
#[derive(Clone, Copy)]
pub struct Ports<'a> {
    /// Dedup occurrence counter
    pub counter: &'a dyn OccurrenceCounter,
    /// Collaborators for the assembler
    pub collaborators: Collaborators<'a>,
}

impl std::fmt::Debug for Ports<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ports").finish_non_exhaustive()
    }
}

/// Result of submitting one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEventResult {
    /// Whether the event was applied
    pub skill_applied: bool,
    /// Why the event was not applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Records and notices produced; empty when not applied
    pub outcome: EventOutcome,
}

impl SkillEventResult {
    /// Result for an event that was not applied
    #[must_use]
    pub fn not_applied(explanation: impl Into<String>) -> Self {
        Self {
            skill_applied: false,
            explanation: Some(explanation.into()),
            outcome: EventOutcome::default(),
        }
    }

    /// Newly crossed levels
    #[must_use]
    pub fn completed(&self) -> &[CompletionNotice] {
        &self.outcome.notices
    }
}

/// Run one event through the whole pipeline
///
/// 1. the time window gate on the performed skill,
/// 2. the max-points guard (when enabled),
/// 3. the hierarchy walk producing records and notices.
pub fn process_event(
    event: &IncomingEvent,
    snapshot: &LoadedSnapshot,
    ports: Ports<'_>,
    settings: EngineSettings,
) -> Result<SkillEventResult> {
    // Checked again by `assemble`; done here so bad input never reaches the counter
    event.validate()?;
    snapshot.validate_for(event)?;

    let skill = &snapshot.skill.node;
    let gate = time_window::evaluate(skill, &event.user_id, event.timestamp, ports.counter)?;
    if !gate.admitted {
        let reason = gate.reason.unwrap_or_default();
        info!("{} rejected for {}: {reason}", skill.label(), event.user_id);
        return Ok(SkillEventResult::not_applied(reason));
    }

    if settings.enforce_max_points {
        let held = aggregate_points(&snapshot.skill.points, &event.user_id, skill);
        if held >= skill.total_points {
            info!("{} for {} already at {held}/{} points", skill.label(), event.user_id, skill.total_points);
            return Ok(SkillEventResult::not_applied(MAX_POINTS_REACHED));
        }
    }

    let outcome = assemble(event, snapshot, ports.collaborators, settings.zone)?;
    info!(
        "{} applied for {}: {} point record(s), {} achievement(s)",
        skill.label(),
        event.user_id,
        outcome.points_to_create.len(),
        outcome.achievements.len()
    );

    Ok(SkillEventResult {
        skill_applied: true,
        explanation: None,
        outcome,
    })
}
