//! Read-only snapshot of the hierarchy an event touches
//!
//! The caller loads the snapshot from storage before processing an event.
//! The engine never queries storage itself.

use serde::{Deserialize, Serialize};

use super::{AchievementRecord, IncomingEvent, LevelThreshold, NodeKind, PointRecord, SkillNode};
use crate::error::{EngineError, Result};

/// One node with the user's existing records on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// The node definition
    pub node: SkillNode,

    /// Existing point records (aggregate and daily) for the user on this node
    #[serde(default)]
    pub points: Vec<PointRecord>,

    /// Existing achievements for the user on this node
    #[serde(default)]
    pub achievements: Vec<AchievementRecord>,

    /// Level thresholds of this node
    #[serde(default)]
    pub thresholds: Vec<LevelThreshold>,
}

impl NodeSnapshot {
    /// Snapshot of a node with no prior records
    #[must_use]
    pub const fn empty(node: SkillNode) -> Self {
        Self {
            node,
            points: Vec::new(),
            achievements: Vec::new(),
            thresholds: Vec::new(),
        }
    }

    /// Attach level thresholds
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Vec<LevelThreshold>) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Attach existing point records
    #[must_use]
    pub fn with_points(mut self, points: Vec<PointRecord>) -> Self {
        self.points = points;
        self
    }

    /// Attach existing achievements
    #[must_use]
    pub fn with_achievements(mut self, achievements: Vec<AchievementRecord>) -> Self {
        self.achievements = achievements;
        self
    }
}

/// Everything the engine needs to decide on one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedSnapshot {
    /// The performed skill
    pub skill: NodeSnapshot,

    /// Ancestor containers, innermost first
    #[serde(default)]
    pub ancestors: Vec<NodeSnapshot>,

    /// The project root
    pub project: NodeSnapshot,

    /// Total points achievable in the project
    pub project_total_points: i64,
}

impl LoadedSnapshot {
    /// Check that the snapshot describes the hierarchy of `event`
    ///
    /// A mismatch means the caller loaded the wrong data.
    pub fn validate_for(&self, event: &IncomingEvent) -> Result<()> {
        let skill = &self.skill.node;
        if skill.skill_id.as_deref() != Some(event.skill_id.as_str()) {
            return Err(EngineError::not_found(format!(
                "skill {} is not in the supplied snapshot",
                event.skill_id
            )));
        }
        if skill.kind != NodeKind::Skill {
            return Err(EngineError::not_found(format!(
                "snapshot node for {} is a {}, not a skill",
                event.skill_id, skill.kind
            )));
        }

        for ancestor in &self.ancestors {
            let node = &ancestor.node;
            if node.kind == NodeKind::Project || node.skill_id.is_none() {
                return Err(EngineError::not_found(format!(
                    "ancestor #{} of {} is not a container with an id",
                    node.ref_id, event.skill_id
                )));
            }
        }

        if !self.project.node.is_project_root() {
            return Err(EngineError::not_found(format!(
                "project root for {} is missing from the snapshot",
                event.project_id
            )));
        }
        Ok(())
    }

    /// Nodes in the order points are accumulated: skill, ancestors, project root
    pub fn hierarchy(&self) -> impl Iterator<Item = &NodeSnapshot> {
        std::iter::once(&self.skill)
            .chain(self.ancestors.iter())
            .chain(std::iter::once(&self.project))
    }
}
