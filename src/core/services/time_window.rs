//! Time window gate - rejects duplicate events
//!
//! A node may limit how many times a skill counts within a window of minutes
//! around the event. This module decides admission; it never writes anything.

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;

use crate::core::models::SkillNode;
use crate::core::ports::OccurrenceCounter;
use crate::error::{EngineError, Result};

/// Admission decision for one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    /// Whether the event may be applied
    pub admitted: bool,
    /// Human-readable explanation when rejected
    pub reason: Option<String>,
}

impl GateDecision {
    /// Admitted without explanation (also used when dedup is disabled)
    pub const ADMIT: Self = Self {
        admitted: true,
        reason: None,
    };

    /// Rejected with an explanation
    #[must_use]
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            admitted: false,
            reason: Some(reason.into()),
        }
    }
}

/// Decide whether an event on `node` at `timestamp` is a duplicate
///
/// The window is `(timestamp - interval, timestamp + interval)` with both
/// bounds exclusive. The event is rejected only when the counter reports at
/// least one prior event and at least `max_occurrences_within_interval` of them.
pub fn evaluate(
    node: &SkillNode,
    user_id: &str,
    timestamp: DateTime<Utc>,
    counter: &dyn OccurrenceCounter,
) -> Result<GateDecision> {
    let interval = node.point_increment_interval;
    if interval <= 0 {
        return Ok(GateDecision::ADMIT);
    }

    let bounds = TimeDelta::try_minutes(interval).and_then(|window| {
        Some((timestamp.checked_sub_signed(window)?, timestamp.checked_add_signed(window)?))
    });
    let Some((start, end)) = bounds else {
        return Err(EngineError::configuration(format!(
            "{} dedup interval {interval} is out of range",
            node.label()
        )));
    };
    let count = counter.count_within(user_id, node, start, end)?;

    // A zero count never rejects, even if max occurrences is set to 0 or below
    let limit = node.max_occurrences_within_interval;
    let reached = count > 0 && i128::from(count) >= i128::from(limit);

    debug!(
        "{} for {user_id}: {count} prior event(s) within {interval}m (limit {limit})",
        node.label()
    );

    if reached {
        Ok(GateDecision::reject(format!(
            "already performed within the last {}",
            pretty_interval(interval)
        )))
    } else {
        Ok(GateDecision::ADMIT)
    }
}

/// Render a number of minutes as hours and/or minutes
///
/// Units that are zero are omitted; units are pluralized unless the value is 1.
#[must_use]
pub fn pretty_interval(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    let mut parts = Vec::new();
    if hours != 0 {
        parts.push(unit(hours, "hour"));
    }
    if mins != 0 || hours == 0 {
        parts.push(unit(mins, "minute"));
    }
    parts.join(" ")
}

fn unit(value: i64, name: &str) -> String {
    if value == 1 {
        format!("{value} {name}")
    } else {
        format!("{value} {name}s")
    }
}
