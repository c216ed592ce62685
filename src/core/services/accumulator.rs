//! Points accumulator - decides which point rows to create
//!
//! Only new rows are decided here. Incrementing rows that already exist is a
//! write-side concern of the storage collaborator.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use log::debug;

use crate::core::models::{PointRecord, SkillNode};

/// Calendar day of `timestamp` in the reference time zone
#[must_use]
pub fn bucket_day(timestamp: DateTime<Utc>, zone: FixedOffset) -> NaiveDate {
    timestamp.with_timezone(&zone).date_naive()
}

/// Point records to create for `user_id` on `node`
///
/// Emits the aggregate record when the user has none on this node, and the
/// daily record for `day` when that day has none yet. Records in `existing`
/// that belong to another user or node are ignored.
#[must_use]
pub fn points_to_create(
    node: &SkillNode,
    user_id: &str,
    project_id: &str,
    day: NaiveDate,
    increment: i64,
    existing: &[PointRecord],
) -> Vec<PointRecord> {
    let mine = || existing.iter().filter(|r| r.belongs_to(user_id, node));
    let has_aggregate = mine().any(PointRecord::is_aggregate);
    let has_daily = mine().any(|r| r.day == Some(day));

    let mut created = Vec::new();
    if !has_aggregate {
        created.push(PointRecord::aggregate(node, user_id, project_id, increment));
    }
    if !has_daily {
        created.push(PointRecord::daily(node, user_id, project_id, increment, day));
    }

    debug!("{} for {user_id} on {day}: {} new point record(s)", node.label(), created.len());
    created
}
