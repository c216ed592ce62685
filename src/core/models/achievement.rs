//! Achievements and completion notices

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NodeKind, SkillNode};

/// A level a user reached on a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    /// User who reached the level
    pub user_id: String,

    /// Project the node lives in
    pub project_id: String,

    /// Human id of the node (`None` for the project root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,

    /// Reference id of the node
    pub node_ref_id: i64,

    /// Level reached
    pub level: u32,

    /// User's total on the node when the level was reached
    pub points_when_achieved: i64,

    /// When the level was reached
    pub achieved_on: DateTime<Utc>,
}

impl AchievementRecord {
    /// Whether this achievement belongs to the given user and node
    #[must_use]
    pub fn belongs_to(&self, user_id: &str, node: &SkillNode) -> bool {
        self.user_id == user_id && self.node_ref_id == node.ref_id
    }
}

/// Highest level a user already holds on a node, 0 when none
#[must_use]
pub fn max_achieved_level(achievements: &[AchievementRecord], user_id: &str, node: &SkillNode) -> u32 {
    achievements
        .iter()
        .filter(|a| a.belongs_to(user_id, node))
        .map(|a| a.level)
        .max()
        .unwrap_or(0)
}

/// Kind of container a notice is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionKind {
    /// A subject level
    Subject,
    /// A project-wide level
    Overall,
}

impl CompletionKind {
    /// Notice kind for a leveled node, `None` for kinds that never level
    #[must_use]
    pub const fn for_node(kind: NodeKind) -> Option<Self> {
        match kind {
            NodeKind::Subject => Some(Self::Subject),
            NodeKind::Project => Some(Self::Overall),
            NodeKind::Skill => None,
        }
    }
}

impl std::fmt::Display for CompletionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subject => write!(f, "Subject"),
            Self::Overall => write!(f, "Overall"),
        }
    }
}

/// One newly crossed level, for downstream notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionNotice {
    /// Level crossed
    pub level: u32,

    /// Display name of the node
    pub name: String,

    /// Subject or overall
    pub kind: CompletionKind,

    /// Human id of the node (`None` for the project root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CompletionNotice {
    /// Describe an achievement for notification
    #[must_use]
    pub fn from_achievement(achievement: &AchievementRecord, node: &SkillNode, kind: CompletionKind) -> Self {
        Self {
            level: achievement.level,
            name: node.name.clone(),
            kind,
            id: node.skill_id.clone(),
        }
    }
}
