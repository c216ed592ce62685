//! Check a scenario's event against the dedup window

use std::path::Path;

use chrono::Utc;
use levelup::adapters::file::load_scenario;
use levelup::core::services::time_window;
use levelup::output::{GateReport, OutputMode};

/// Run only the time window gate over a scenario
pub fn gate(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let scenario = load_scenario(path)?;
    let now = scenario.now.unwrap_or_else(Utc::now);
    let event = scenario.event.into_event(now);
    event.validate()?;
    scenario.snapshot.validate_for(&event)?;

    let decision =
        time_window::evaluate(&scenario.snapshot.skill.node, &event.user_id, event.timestamp, &scenario.history)?;
    GateReport::new(&event.skill_id, decision).render(mode);
    Ok(())
}
