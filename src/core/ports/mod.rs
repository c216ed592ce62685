//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the decision logic and the
//! systems that own event history, level definitions, and time.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The engine depends only on these traits, never on concrete storage. This
//! keeps every decision a pure function of the event, the loaded snapshot,
//! and the answers these collaborators give.

mod clock;
mod event_history;
mod level_lookup;

pub use clock::Clock;
pub use event_history::{LatestEventTimestamp, OccurrenceCounter};
pub use level_lookup::LevelLookup;
