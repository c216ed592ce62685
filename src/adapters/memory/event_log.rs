//! In-memory event log
//!
//! Answers both event history questions from a list of performed events and
//! a skill → container membership map. A container (or the project root)
//! sees every event on a skill beneath it.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::SkillNode;
use crate::core::ports::{LatestEventTimestamp, OccurrenceCounter};

/// A previously recorded event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformedEvent {
    /// User who performed the skill
    pub user_id: String,
    /// Project of the skill
    pub project_id: String,
    /// Skill performed
    pub skill_id: String,
    /// When it was performed
    pub timestamp: DateTime<Utc>,
}

/// Event history held in memory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryEventLog {
    /// Recorded events
    #[serde(default)]
    pub events: Vec<PerformedEvent>,

    /// Direct parents of each skill or container, keyed by child id
    #[serde(default)]
    pub memberships: HashMap<String, Vec<String>>,
}

impl InMemoryEventLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a performed event
    pub fn record(&mut self, user_id: &str, project_id: &str, skill_id: &str, timestamp: DateTime<Utc>) {
        self.events.push(PerformedEvent {
            user_id: user_id.to_string(),
            project_id: project_id.to_string(),
            skill_id: skill_id.to_string(),
            timestamp,
        });
    }

    /// Declare `container_id` as a direct parent of `child_id`
    pub fn add_membership(&mut self, child_id: &str, container_id: &str) {
        let parents = self.memberships.entry(child_id.to_string()).or_default();
        if !parents.iter().any(|p| p == container_id) {
            parents.push(container_id.to_string());
        }
    }

    /// Builder form of [`Self::add_membership`]
    #[must_use]
    pub fn with_membership(mut self, child_id: &str, container_id: &str) -> Self {
        self.add_membership(child_id, container_id);
        self
    }

    /// Whether an event on `skill_id` contributes to `node`
    fn contributes(&self, skill_id: &str, node: &SkillNode) -> bool {
        let Some(target) = node.skill_id.as_deref() else {
            // project root sees every skill
            return true;
        };

        let mut seen = HashSet::new();
        let mut pending = vec![skill_id];
        while let Some(current) = pending.pop() {
            if current == target {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(parents) = self.memberships.get(current) {
                pending.extend(parents.iter().map(String::as_str));
            }
        }
        false
    }

    fn events_for<'a>(&'a self, user_id: &'a str, node: &'a SkillNode) -> impl Iterator<Item = &'a PerformedEvent> {
        self.events
            .iter()
            .filter(move |e| e.user_id == user_id && self.contributes(&e.skill_id, node))
    }
}

impl OccurrenceCounter for InMemoryEventLog {
    fn count_within(
        &self,
        user_id: &str,
        node: &SkillNode,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<u64> {
        let count = self
            .events_for(user_id, node)
            .filter(|e| e.timestamp > start && e.timestamp < end)
            .count();
        Ok(u64::try_from(count)?)
    }
}

impl LatestEventTimestamp for InMemoryEventLog {
    fn latest_event(
        &self,
        user_id: &str,
        project_id: &str,
        node: &SkillNode,
        up_to: DateTime<Utc>,
    ) -> anyhow::Result<Option<DateTime<Utc>>> {
        Ok(self
            .events_for(user_id, node)
            .filter(|e| e.project_id == project_id && e.timestamp <= up_to)
            .map(|e| e.timestamp)
            .max())
    }
}
