//! Achievement evaluator - detects newly crossed levels on one node
//!
//! A single event may cross several levels at once (an import back-applying
//! many points, for instance). Every level between the highest one already
//! held and the newly reached one is recorded, all with the same timestamp
//! and the same score.

use chrono::{DateTime, Utc};
use log::debug;

use crate::core::models::{
    AchievementRecord, IncomingEvent, LevelThreshold, SkillNode, max_achieved_level, validate_thresholds,
};
use crate::core::ports::{Clock, LatestEventTimestamp, LevelLookup};
use crate::error::{EngineError, Result};

/// Inputs for checking one node
#[derive(Debug, Clone, Copy)]
pub struct LevelCheck<'a> {
    /// Node being leveled
    pub node: &'a SkillNode,
    /// User who performed the event
    pub user_id: &'a str,
    /// Project of the event
    pub project_id: &'a str,
    /// User's total on the node before this event (0 when none)
    pub existing_score: i64,
    /// Points this event adds
    pub increment: i64,
    /// Total points achievable on the node
    pub total_points: i64,
    /// Level thresholds of the node
    pub thresholds: &'a [LevelThreshold],
    /// Achievements the user already holds
    pub existing_achievements: &'a [AchievementRecord],
}

/// Resolves the instant an achievement is recorded at
///
/// With an explicitly supplied event timestamp, the achievement is dated at
/// the latest contributing event, but never before the triggering event.
/// Without one, it is dated now.
#[derive(Clone, Copy)]
pub struct AchievedOnResolver<'a> {
    event: &'a IncomingEvent,
    latest: &'a dyn LatestEventTimestamp,
    clock: &'a dyn Clock,
}

impl std::fmt::Debug for AchievedOnResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AchievedOnResolver").field("event", &self.event).finish_non_exhaustive()
    }
}

impl<'a> AchievedOnResolver<'a> {
    /// Create a resolver for `event`
    #[must_use]
    pub fn new(event: &'a IncomingEvent, latest: &'a dyn LatestEventTimestamp, clock: &'a dyn Clock) -> Self {
        Self { event, latest, clock }
    }

    /// Timestamp to record for an achievement on `node`
    pub fn resolve(&self, node: &SkillNode) -> Result<DateTime<Utc>> {
        let now = self.clock.now();
        if !self.event.timestamp_supplied {
            return Ok(now);
        }

        let latest = self.latest.latest_event(&self.event.user_id, &self.event.project_id, node, now)?;
        Ok(latest.map_or(self.event.timestamp, |latest| latest.max(self.event.timestamp)))
    }
}

/// Achievement records for every level newly crossed on `check.node`
///
/// Returns an empty list when the new level does not exceed the highest
/// level the user already holds. The resolver is only consulted when at
/// least one level is crossed.
pub fn check_levels(
    check: &LevelCheck<'_>,
    lookup: &dyn LevelLookup,
    resolver: &AchievedOnResolver<'_>,
) -> Result<Vec<AchievementRecord>> {
    let label = check.node.label();
    if check.total_points <= 0 {
        return Err(EngineError::configuration(format!(
            "{label} has {} total points",
            check.total_points
        )));
    }
    validate_thresholds(&label, check.thresholds)?;

    let current_score = check.existing_score.checked_add(check.increment).ok_or_else(|| {
        EngineError::configuration(format!(
            "{label} score {} plus {} points overflows",
            check.existing_score, check.increment
        ))
    })?;
    let new_level =
        lookup.resolve_level(check.project_id, check.thresholds, check.total_points, current_score)?;
    let max_achieved = max_achieved_level(check.existing_achievements, check.user_id, check.node);

    debug!(
        "{label} for {}: score {current_score}/{} reaches level {new_level} (held {max_achieved})",
        check.user_id, check.total_points
    );

    if new_level <= max_achieved {
        return Ok(Vec::new());
    }

    let achieved_on = resolver.resolve(check.node)?;
    Ok((max_achieved + 1..=new_level)
        .map(|level| AchievementRecord {
            user_id: check.user_id.to_string(),
            project_id: check.project_id.to_string(),
            skill_id: check.node.skill_id.clone(),
            node_ref_id: check.node.ref_id,
            level,
            points_when_achieved: current_score,
            achieved_on,
        })
        .collect())
}
