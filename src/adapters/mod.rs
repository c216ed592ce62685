//! Adapter implementations for port traits
//!
//! This module contains concrete implementations of the collaborators:
//!
//! - `memory/` - In-memory event history (occurrence counts, latest timestamps)
//! - `level` - Percentage-of-total level lookup
//! - `clock` - System and fixed clocks
//! - `file/` - JSON scenario files for replaying events

pub mod clock;
pub mod file;
pub mod level;
pub mod memory;

pub use clock::{FixedClock, SystemClock};
pub use level::PercentageLevelLookup;
pub use memory::{InMemoryEventLog, PerformedEvent};
