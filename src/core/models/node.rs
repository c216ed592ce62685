//! Hierarchy nodes
//!
//! A node is a skill, a subject, or the project root. Containment is fixed:
//! skill → subject → project.

use serde::{Deserialize, Serialize};

/// Kind of a hierarchy node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A leaf skill users perform
    #[default]
    Skill,
    /// A container of skills that users level up in
    Subject,
    /// The project root
    Project,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skill => write!(f, "skill"),
            Self::Subject => write!(f, "subject"),
            Self::Project => write!(f, "project"),
        }
    }
}

impl std::str::FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skill" => Ok(Self::Skill),
            "subject" => Ok(Self::Subject),
            "project" => Ok(Self::Project),
            _ => Err(format!("Invalid node kind: {s}. Use: skill, subject, project")),
        }
    }
}

/// A skill, subject, or project definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillNode {
    /// Stable reference id
    pub ref_id: i64,

    /// Human id (`None` for the project root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,

    /// Display name
    pub name: String,

    /// Node kind
    #[serde(default)]
    pub kind: NodeKind,

    /// Total points achievable for this node
    pub total_points: i64,

    /// Points awarded per performed event
    #[serde(default)]
    pub point_increment: i64,

    /// Dedup window in minutes; `<= 0` disables dedup
    #[serde(default)]
    pub point_increment_interval: i64,

    /// Occurrences allowed within the dedup window
    #[serde(default = "default_max_occurrences")]
    pub max_occurrences_within_interval: i64,
}

const fn default_max_occurrences() -> i64 {
    1
}

impl SkillNode {
    /// Create a skill node
    #[must_use]
    pub fn skill(ref_id: i64, skill_id: &str, name: &str, point_increment: i64, total_points: i64) -> Self {
        Self {
            ref_id,
            skill_id: Some(skill_id.to_string()),
            name: name.to_string(),
            kind: NodeKind::Skill,
            total_points,
            point_increment,
            point_increment_interval: 0,
            max_occurrences_within_interval: default_max_occurrences(),
        }
    }

    /// Create a subject node
    #[must_use]
    pub fn subject(ref_id: i64, skill_id: &str, name: &str, total_points: i64) -> Self {
        Self {
            ref_id,
            skill_id: Some(skill_id.to_string()),
            name: name.to_string(),
            kind: NodeKind::Subject,
            total_points,
            point_increment: 0,
            point_increment_interval: 0,
            max_occurrences_within_interval: default_max_occurrences(),
        }
    }

    /// Create the project root node
    #[must_use]
    pub fn project(ref_id: i64, name: &str, total_points: i64) -> Self {
        Self {
            ref_id,
            skill_id: None,
            name: name.to_string(),
            kind: NodeKind::Project,
            total_points,
            point_increment: 0,
            point_increment_interval: 0,
            max_occurrences_within_interval: default_max_occurrences(),
        }
    }

    /// Set the dedup window
    #[must_use]
    pub const fn with_window(mut self, interval_minutes: i64, max_occurrences: i64) -> Self {
        self.point_increment_interval = interval_minutes;
        self.max_occurrences_within_interval = max_occurrences;
        self
    }

    /// Whether this node is the project root
    #[must_use]
    pub fn is_project_root(&self) -> bool {
        self.kind == NodeKind::Project && self.skill_id.is_none()
    }

    /// Label used in log lines and error messages
    #[must_use]
    pub fn label(&self) -> String {
        match &self.skill_id {
            Some(id) => format!("{} {id}", self.kind),
            None => format!("{} root #{}", self.kind, self.ref_id),
        }
    }
}
