//! Level lookup port
//!
//! Defines how a score maps to a level.

use super::super::models::LevelThreshold;

/// Resolves the level a score reaches
pub trait LevelLookup: Send + Sync {
    /// Highest level reached by `current_score` out of `total_points`
    ///
    /// Returns 0 when no threshold is met. `thresholds` have already been
    /// validated: numbered 1..N with non-decreasing percentages.
    fn resolve_level(
        &self,
        project_id: &str,
        thresholds: &[LevelThreshold],
        total_points: i64,
        current_score: i64,
    ) -> anyhow::Result<u32>;
}
