//! Typed presence table: user → calendar date → clock-in/clock-out record.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// User identifier as it appears in the record file.
pub type UserId = i64;

/// Clock-in/clock-out pair for one user on one date.
///
/// No ordering is enforced between `start` and `end`; a record whose end is
/// earlier than its start produces a negative interval downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// All records of one user, keyed by calendar date.
///
/// At most one record per date; iteration order is date order, which makes
/// downstream bucketing deterministic.
pub type DayRecords = BTreeMap<NaiveDate, AttendanceRecord>;

/// Full presence table keyed by user id.
pub type PresenceTable = BTreeMap<UserId, DayRecords>;

/// One entry of the user listing exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub user_id: UserId,
    pub name: String,
}
