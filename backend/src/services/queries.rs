//! Read-only query facade consumed by the presentation layer.
//!
//! Each operation takes a user id and produces ordered per-weekday rows
//! whose serde encoding is the JSON array-of-arrays the frontend charts
//! expect. An unknown user yields an empty result and a logged diagnostic,
//! never an error; only a missing or unreadable source file fails.

use log::debug;
use serde::Serialize;

use crate::config::DataConfig;
use crate::models::{DayRecords, PresenceTable, UserId, UserSummary, WEEKDAY_ABBR};
use crate::services::weekday::{bucket_intervals, mean, reduce_start_end};
use crate::store::{load_records, StoreError};

/// One row of the total-time report: the leading header pseudo-row or a
/// weekday row. Both variants serialize as plain JSON arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TotalTimeRow {
    Header(&'static str, &'static str),
    Weekday(&'static str, i64),
}

/// Column labels prepended to the total-time report.
const TOTAL_TIME_HEADER: TotalTimeRow = TotalTimeRow::Header("Weekday", "Presence (s)");

/// Look up one user's records, logging the not-found diagnostic once.
fn user_records(table: &PresenceTable, user_id: UserId) -> Option<&DayRecords> {
    let records = table.get(&user_id);
    if records.is_none() {
        debug!("User {} not found!", user_id);
    }
    records
}

/// Mean presence seconds per weekday for `user_id`, Monday first.
///
/// Seven rows for a known user, zero-mean weekdays included; an empty
/// vector for an unknown one.
pub fn mean_time_by_weekday(table: &PresenceTable, user_id: UserId) -> Vec<(&'static str, f64)> {
    let Some(records) = user_records(table, user_id) else {
        return Vec::new();
    };

    let buckets = bucket_intervals(records);
    WEEKDAY_ABBR
        .iter()
        .enumerate()
        .map(|(day, name)| (*name, mean(buckets.get(day))))
        .collect()
}

/// Total presence seconds per weekday for `user_id`, preceded by a header
/// row (eight rows in total). An unknown user yields an empty vector with
/// no header.
pub fn total_time_by_weekday(table: &PresenceTable, user_id: UserId) -> Vec<TotalTimeRow> {
    let Some(records) = user_records(table, user_id) else {
        return Vec::new();
    };

    let buckets = bucket_intervals(records);
    let mut rows = Vec::with_capacity(WEEKDAY_ABBR.len() + 1);
    rows.push(TOTAL_TIME_HEADER);
    rows.extend(
        WEEKDAY_ABBR
            .iter()
            .enumerate()
            .map(|(day, name)| TotalTimeRow::Weekday(*name, buckets.get(day).iter().sum())),
    );
    rows
}

/// Truncated mean clock-in and clock-out offsets per weekday for `user_id`,
/// Monday first. Seven rows for a known user, empty for an unknown one.
pub fn start_end_by_weekday(
    table: &PresenceTable,
    user_id: UserId,
) -> Vec<(&'static str, i64, i64)> {
    let Some(records) = user_records(table, user_id) else {
        return Vec::new();
    };

    let means = reduce_start_end(records);
    WEEKDAY_ABBR
        .iter()
        .enumerate()
        .map(|(day, name)| (*name, means[day].start, means[day].end))
        .collect()
}

/// Every user present in the table, in id order, with a display name for
/// the frontend dropdown.
pub fn users(table: &PresenceTable) -> Vec<UserSummary> {
    table
        .keys()
        .map(|&user_id| UserSummary {
            user_id,
            name: format!("User {}", user_id),
        })
        .collect()
}

/// Facade that reloads the record file on every query, mirroring the
/// stateless request lifecycle of the reference frontend: no cache, no
/// shared mutable state across calls. Parse diagnostics are logged by the
/// store and dropped here.
#[derive(Debug, Clone)]
pub struct PresenceService {
    config: DataConfig,
}

impl PresenceService {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    fn load_table(&self) -> Result<PresenceTable, StoreError> {
        Ok(load_records(&self.config.presence_csv)?.table)
    }

    /// User listing for the frontend dropdown.
    pub fn users(&self) -> Result<Vec<UserSummary>, StoreError> {
        Ok(users(&self.load_table()?))
    }

    /// Mean presence time per weekday.
    pub fn mean_time_by_weekday(
        &self,
        user_id: UserId,
    ) -> Result<Vec<(&'static str, f64)>, StoreError> {
        Ok(mean_time_by_weekday(&self.load_table()?, user_id))
    }

    /// Total presence time per weekday, with the header row.
    pub fn total_time_by_weekday(&self, user_id: UserId) -> Result<Vec<TotalTimeRow>, StoreError> {
        Ok(total_time_by_weekday(&self.load_table()?, user_id))
    }

    /// Mean clock-in/clock-out offsets per weekday.
    pub fn start_end_by_weekday(
        &self,
        user_id: UserId,
    ) -> Result<Vec<(&'static str, i64, i64)>, StoreError> {
        Ok(start_end_by_weekday(&self.load_table()?, user_id))
    }
}
