//! In-memory collaborators
//!
//! Implements the event history ports over a list of recorded events.
//! Used by the CLI for scenario files and by tests.

mod event_log;

pub use event_log::{InMemoryEventLog, PerformedEvent};
