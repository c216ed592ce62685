//! Event history ports
//!
//! Defines the questions the engine asks about previously recorded events.

use chrono::{DateTime, Utc};

use super::super::models::SkillNode;

/// Counts prior events for dedup decisions
pub trait OccurrenceCounter: Send + Sync {
    /// Number of recorded events for `(user_id, node)` with a timestamp strictly
    /// between `start` and `end` (both bounds exclusive)
    fn count_within(
        &self,
        user_id: &str,
        node: &SkillNode,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<u64>;
}

/// Finds the latest event that contributed points to a node
pub trait LatestEventTimestamp: Send + Sync {
    /// Latest timestamp, no later than `up_to`, among recorded events that
    /// contributed to `node` for `user_id`
    ///
    /// For a container or the project root this covers events on any skill
    /// beneath it. Returns `None` when there are no such events.
    fn latest_event(
        &self,
        user_id: &str,
        project_id: &str,
        node: &SkillNode,
        up_to: DateTime<Utc>,
    ) -> anyhow::Result<Option<DateTime<Utc>>>;
}
