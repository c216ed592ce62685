//! Result assembler - walks the hierarchy for one event
//!
//! The hierarchy is the explicit ordered list from the snapshot: the skill,
//! its ancestors innermost first, then the project root. Points propagate to
//! every node; levels are checked only on subjects and the project root.

use chrono::FixedOffset;
use log::debug;
use serde::Serialize;

use super::accumulator::{bucket_day, points_to_create};
use super::evaluator::{AchievedOnResolver, LevelCheck, check_levels};
use crate::core::models::{
    AchievementRecord, CompletionKind, CompletionNotice, IncomingEvent, LoadedSnapshot, PointRecord,
    aggregate_points,
};
use crate::core::ports::{Clock, LatestEventTimestamp, LevelLookup};
use crate::error::{EngineError, Result};

/// Collaborators the assembler consults
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    /// Maps a score to a level
    pub level_lookup: &'a dyn LevelLookup,
    /// Latest contributing event, for achievement timestamps
    pub latest_event: &'a dyn LatestEventTimestamp,
    /// Source of "now"
    pub clock: &'a dyn Clock,
}

impl std::fmt::Debug for Collaborators<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// Everything one event produces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventOutcome {
    /// New point rows to insert
    pub points_to_create: Vec<PointRecord>,
    /// New achievement rows to insert
    pub achievements: Vec<AchievementRecord>,
    /// Newly crossed levels for notification
    pub notices: Vec<CompletionNotice>,
    /// Points the event added to every node in the hierarchy
    pub points_earned: i64,
}

/// Decide every record `event` produces over `snapshot`
///
/// Output order follows the hierarchy: skill, ancestors innermost first,
/// then the project root.
pub fn assemble(
    event: &IncomingEvent,
    snapshot: &LoadedSnapshot,
    collaborators: Collaborators<'_>,
    zone: FixedOffset,
) -> Result<EventOutcome> {
    event.validate()?;
    snapshot.validate_for(event)?;

    let increment = snapshot.skill.node.point_increment;
    if increment <= 0 {
        return Err(EngineError::configuration(format!(
            "{} awards {increment} points per event",
            snapshot.skill.node.label()
        )));
    }

    let day = bucket_day(event.timestamp, zone);
    let resolver = AchievedOnResolver::new(event, collaborators.latest_event, collaborators.clock);
    let mut outcome = EventOutcome {
        points_earned: increment,
        ..EventOutcome::default()
    };

    for entry in snapshot.hierarchy() {
        let node = &entry.node;
        outcome.points_to_create.extend(points_to_create(
            node,
            &event.user_id,
            &event.project_id,
            day,
            increment,
            &entry.points,
        ));

        let Some(kind) = CompletionKind::for_node(node.kind) else {
            continue;
        };
        let total_points = if node.is_project_root() {
            snapshot.project_total_points
        } else {
            node.total_points
        };

        let check = LevelCheck {
            node,
            user_id: &event.user_id,
            project_id: &event.project_id,
            existing_score: aggregate_points(&entry.points, &event.user_id, node),
            increment,
            total_points,
            thresholds: &entry.thresholds,
            existing_achievements: &entry.achievements,
        };
        let achieved = check_levels(&check, collaborators.level_lookup, &resolver)?;
        for achievement in &achieved {
            debug!("{} level {} reached by {}", node.label(), achievement.level, event.user_id);
            outcome.notices.push(CompletionNotice::from_achievement(achievement, node, kind));
        }
        outcome.achievements.extend(achieved);
    }

    Ok(outcome)
}
