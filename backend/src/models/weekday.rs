//! Weekday labels and per-weekday accumulators.

use chrono::Weekday;
use serde::Serialize;

/// Fixed weekday labels, index 0 = Monday … 6 = Sunday.
///
/// A literal table rather than a locale lookup so that reports are
/// reproducible regardless of the host environment.
pub const WEEKDAY_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Per-weekday accumulator with all seven slots always present.
///
/// Indexing by [`Weekday`] makes a missing slot unrepresentable; weekdays
/// without data simply hold an empty sequence. Instances are ephemeral,
/// built and consumed within a single aggregation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayBuckets<T> {
    slots: [Vec<T>; 7],
}

impl<T> WeekdayBuckets<T> {
    /// Seven empty slots.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Append `value` to the slot for `day`.
    pub fn push(&mut self, day: Weekday, value: T) {
        self.slots[day.num_days_from_monday() as usize].push(value);
    }

    /// Values accumulated for weekday index `day` (0 = Monday … 6 = Sunday).
    pub fn get(&self, day: usize) -> &[T] {
        &self.slots[day]
    }

    /// Slots in weekday order, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.slots.iter().map(Vec::as_slice)
    }
}

impl<T> Default for WeekdayBuckets<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parallel clock-in/clock-out offset samples for one weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartEndSamples {
    pub start: Vec<i64>,
    pub end: Vec<i64>,
}

/// Truncated mean clock-in/clock-out offsets for one weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MeanStartEnd {
    pub start: i64,
    pub end: i64,
}
