//! Incoming "skill performed" events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A user performed a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingEvent {
    /// User who performed the skill
    pub user_id: String,

    /// Project the skill belongs to
    pub project_id: String,

    /// Skill that was performed
    pub skill_id: String,

    /// When the skill was performed
    pub timestamp: DateTime<Utc>,

    /// Whether the submitter supplied `timestamp` (otherwise it defaulted to now)
    pub timestamp_supplied: bool,
}

impl IncomingEvent {
    /// Event with an explicitly supplied timestamp
    #[must_use]
    pub fn at(user_id: &str, project_id: &str, skill_id: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            project_id: project_id.to_string(),
            skill_id: skill_id.to_string(),
            timestamp,
            timestamp_supplied: true,
        }
    }

    /// Event stamped with the current time
    #[must_use]
    pub fn now(user_id: &str, project_id: &str, skill_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            timestamp_supplied: false,
            ..Self::at(user_id, project_id, skill_id, now)
        }
    }

    /// Ensure all required identifiers are present
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("user id", &self.user_id),
            ("project id", &self.project_id),
            ("skill id", &self.skill_id),
        ] {
            if value.trim().is_empty() {
                return Err(EngineError::invalid_input(format!("{field} is required")));
            }
        }
        Ok(())
    }
}

/// Event as submitted, before the timestamp default is applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequest {
    /// User who performed the skill
    pub user_id: String,

    /// Project the skill belongs to
    pub project_id: String,

    /// Skill that was performed
    pub skill_id: String,

    /// Optional explicit timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl EventRequest {
    /// Resolve into an event, defaulting a missing timestamp to `now`
    #[must_use]
    pub fn into_event(self, now: DateTime<Utc>) -> IncomingEvent {
        IncomingEvent {
            user_id: self.user_id,
            project_id: self.project_id,
            skill_id: self.skill_id,
            timestamp: self.timestamp.unwrap_or(now),
            timestamp_supplied: self.timestamp.is_some(),
        }
    }
}
