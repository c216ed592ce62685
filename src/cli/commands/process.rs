//! Process one event from a scenario file

use std::path::Path;

use levelup::adapters::file::load_scenario;
use levelup::adapters::{FixedClock, PercentageLevelLookup, SystemClock};
use levelup::config::GlobalConfig;
use levelup::core::ports::Clock;
use levelup::core::services::{Collaborators, Ports, process_event};
use levelup::output::{OutputMode, ProcessReport};

/// Run the full pipeline over a scenario
pub fn process(path: &Path, config: &GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    let scenario = load_scenario(path)?;
    let settings = config.engine.settings()?;

    let clock: Box<dyn Clock> = match scenario.now {
        Some(now) => Box::new(FixedClock::new(now)),
        None => Box::new(SystemClock),
    };
    let event = scenario.event.clone().into_event(clock.now());

    let ports = Ports {
        counter: &scenario.history,
        collaborators: Collaborators {
            level_lookup: &PercentageLevelLookup,
            latest_event: &scenario.history,
            clock: clock.as_ref(),
        },
    };
    let result = process_event(&event, &scenario.snapshot, ports, settings)?;

    let report = ProcessReport {
        skill_id: event.skill_id,
        user_id: event.user_id,
        result,
    };
    report.render(mode);
    Ok(())
}
