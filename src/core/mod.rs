//! Core domain logic for levelup
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (SkillNode, PointRecord, AchievementRecord, LoadedSnapshot)
//! - `services/` - Business logic orchestration
//! - `ports/` - Trait definitions for external collaborators

pub mod models;
pub mod ports;
pub mod services;
