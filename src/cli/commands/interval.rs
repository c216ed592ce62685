//! Pretty-print a dedup interval

use levelup::core::services::pretty_interval;
use levelup::output::{IntervalReport, OutputMode};

/// Print `minutes` as hours and minutes
pub fn interval(minutes: i64, mode: OutputMode) -> anyhow::Result<()> {
    if minutes <= 0 {
        anyhow::bail!("Interval must be positive (got {minutes}); 0 or less disables dedup");
    }

    let report = IntervalReport {
        minutes,
        pretty: pretty_interval(minutes),
    };
    report.render(mode);
    Ok(())
}
