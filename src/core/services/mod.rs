//! Business logic services
//!
//! Pure decision logic that operates on domain models.
//! These services perform no I/O of their own - they operate on the data
//! passed in, ask the port traits, and return what should be written.
//!
//! - [`time_window`] - Reject duplicate events within a window
//! - [`accumulator`] - Decide which point rows to create
//! - [`evaluator`] - Detect newly crossed levels on one node
//! - [`assembler`] - Walk the hierarchy for one event
//! - [`engine`] - Gate, guard, and assemble in one pipeline

pub mod accumulator;
pub mod assembler;
pub mod engine;
pub mod evaluator;
pub mod time_window;

pub use accumulator::{bucket_day, points_to_create};
pub use assembler::{Collaborators, EventOutcome, assemble};
pub use engine::{MAX_POINTS_REACHED, Ports, SkillEventResult, process_event};
pub use evaluator::{AchievedOnResolver, LevelCheck, check_levels};
pub use time_window::{GateDecision, pretty_interval};
