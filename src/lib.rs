//! levelup - Turn "skill performed" events into points and level-ups
//!
//! This library decides, for one incoming event, whether it counts, which
//! point records it creates across the skill → subject → project hierarchy,
//! and which levels it unlocks. Storage, locking, and notification delivery
//! stay with the caller; the engine consumes a loaded snapshot and returns
//! what to write.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use error::{EngineError, Result};
