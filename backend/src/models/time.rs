//! Wall-clock time arithmetic.
//!
//! All statistics downstream are computed over whole-second offsets from
//! midnight, so the two functions here are the only place clock values are
//! turned into numbers.

use chrono::{NaiveTime, Timelike};

/// Offset of `t` from midnight, in whole seconds.
pub fn seconds_since_midnight(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 3600 + i64::from(t.minute()) * 60 + i64::from(t.second())
}

/// Signed length in seconds of the wall-clock span from `start` to `end`.
///
/// Negative when `end` is earlier in the day than `start`. The raw signed
/// value is passed through unclamped; records spanning midnight surface as
/// negative intervals.
pub fn interval(start: NaiveTime, end: NaiveTime) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}
