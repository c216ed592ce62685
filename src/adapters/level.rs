//! Percentage-based level lookup

use crate::core::models::LevelThreshold;
use crate::core::ports::LevelLookup;

/// Level lookup over percentage-of-total thresholds
///
/// A level counts only if every lower level is also met, so the result is
/// the length of the leading run of met thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentageLevelLookup;

impl LevelLookup for PercentageLevelLookup {
    fn resolve_level(
        &self,
        _project_id: &str,
        thresholds: &[LevelThreshold],
        total_points: i64,
        current_score: i64,
    ) -> anyhow::Result<u32> {
        if total_points <= 0 {
            anyhow::bail!("cannot resolve a level against {total_points} total points");
        }

        Ok(thresholds
            .iter()
            .take_while(|t| t.is_met(current_score, total_points))
            .last()
            .map_or(0, |t| t.level))
    }
}
