//! Domain models for levelup
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`SkillNode`] - A skill, subject, or project root
//! - [`LevelThreshold`] - "Reach N% of the points for level L"
//! - [`PointRecord`] - Aggregate and daily point totals
//! - [`AchievementRecord`] - "User reached level L on this node"
//! - [`IncomingEvent`] - "User performed this skill"
//! - [`LoadedSnapshot`] - Everything already stored for the touched hierarchy

mod achievement;
mod event;
mod node;
mod points;
mod snapshot;
mod threshold;

pub use achievement::{AchievementRecord, CompletionKind, CompletionNotice, max_achieved_level};
pub use event::{EventRequest, IncomingEvent};
pub use node::{NodeKind, SkillNode};
pub use points::{PointRecord, aggregate_points};
pub use snapshot::{LoadedSnapshot, NodeSnapshot};
pub use threshold::{LevelThreshold, validate_thresholds};
