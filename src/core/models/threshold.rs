//! Level thresholds
//!
//! A threshold states the minimum percentage of a node's total points
//! required to reach a level.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Minimum percentage of total points required for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThreshold {
    /// Reference id of the node this threshold belongs to
    pub node_ref_id: i64,

    /// Ordinal level (1..N)
    pub level: u32,

    /// Minimum percentage (0..=100) of the node's total points
    pub min_percent: u32,
}

impl LevelThreshold {
    /// Create a threshold
    #[must_use]
    pub const fn new(node_ref_id: i64, level: u32, min_percent: u32) -> Self {
        Self {
            node_ref_id,
            level,
            min_percent,
        }
    }

    /// Build the usual ladder of thresholds for a node from a list of percentages
    ///
    /// Level numbers are assigned in order starting at 1.
    #[must_use]
    pub fn ladder(node_ref_id: i64, percents: &[u32]) -> Vec<Self> {
        percents
            .iter()
            .zip(1..)
            .map(|(&pct, level)| Self::new(node_ref_id, level, pct))
            .collect()
    }

    /// Whether `score` out of `total_points` meets this threshold
    ///
    /// Integer comparison: `score * 100 >= min_percent * total_points`.
    #[must_use]
    pub fn is_met(&self, score: i64, total_points: i64) -> bool {
        i128::from(score) * 100 >= i128::from(self.min_percent) * i128::from(total_points)
    }
}

/// Validate a node's thresholds
///
/// Thresholds must be present, numbered 1..N in order, at most 100 percent,
/// and never decrease from one level to the next.
pub fn validate_thresholds(node_label: &str, thresholds: &[LevelThreshold]) -> Result<()> {
    if thresholds.is_empty() {
        return Err(EngineError::configuration(format!("{node_label} has no level thresholds")));
    }

    let mut previous_percent = 0;
    for (expected, threshold) in (1..).zip(thresholds) {
        if threshold.level != expected {
            return Err(EngineError::configuration(format!(
                "{node_label} thresholds are not contiguous: expected level {expected}, found {}",
                threshold.level
            )));
        }
        if threshold.min_percent > 100 {
            return Err(EngineError::configuration(format!(
                "{node_label} level {} requires {}% of total points",
                threshold.level, threshold.min_percent
            )));
        }
        if threshold.min_percent < previous_percent {
            return Err(EngineError::configuration(format!(
                "{node_label} thresholds are unsorted at level {}",
                threshold.level
            )));
        }
        previous_percent = threshold.min_percent;
    }
    Ok(())
}
