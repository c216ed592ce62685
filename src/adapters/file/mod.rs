//! File-based scenario loading
//!
//! A scenario bundles everything needed to replay one event outside the
//! platform: the submitted event, the loaded snapshot, and the prior event
//! history the collaborators answer from.

mod scenario;

pub use scenario::{Scenario, load_scenario};
