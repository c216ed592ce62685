//! Point records
//!
//! Two kinds of records coexist for a (user, node) pair: one aggregate record
//! holding the running total (`day == None`) and one daily record per calendar
//! day holding that day's points.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SkillNode;

/// Accumulated points for a user on a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    /// User the points belong to
    pub user_id: String,

    /// Project the node lives in
    pub project_id: String,

    /// Human id of the node (`None` for the project root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,

    /// Reference id of the node
    pub node_ref_id: i64,

    /// Points held by this record
    pub points: i64,

    /// Calendar day for daily records, `None` for the aggregate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<NaiveDate>,
}

impl PointRecord {
    /// Create the aggregate record for a user on a node
    #[must_use]
    pub fn aggregate(node: &SkillNode, user_id: &str, project_id: &str, points: i64) -> Self {
        Self::new(node, user_id, project_id, points, None)
    }

    /// Create a daily record for a user on a node
    #[must_use]
    pub fn daily(node: &SkillNode, user_id: &str, project_id: &str, points: i64, day: NaiveDate) -> Self {
        Self::new(node, user_id, project_id, points, Some(day))
    }

    fn new(node: &SkillNode, user_id: &str, project_id: &str, points: i64, day: Option<NaiveDate>) -> Self {
        Self {
            user_id: user_id.to_string(),
            project_id: project_id.to_string(),
            skill_id: node.skill_id.clone(),
            node_ref_id: node.ref_id,
            points,
            day,
        }
    }

    /// Whether this is the running-total record
    #[must_use]
    pub const fn is_aggregate(&self) -> bool {
        self.day.is_none()
    }

    /// Whether this record belongs to the given user and node
    #[must_use]
    pub fn belongs_to(&self, user_id: &str, node: &SkillNode) -> bool {
        self.user_id == user_id && self.node_ref_id == node.ref_id
    }
}

/// Current running total of a user on a node, 0 when no aggregate exists
#[must_use]
pub fn aggregate_points(records: &[PointRecord], user_id: &str, node: &SkillNode) -> i64 {
    records
        .iter()
        .find(|r| r.is_aggregate() && r.belongs_to(user_id, node))
        .map_or(0, |r| r.points)
}
