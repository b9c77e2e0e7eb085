//! Weekday bucketing and reduction over one user's records.

use chrono::Datelike;

use crate::models::{
    interval, seconds_since_midnight, DayRecords, MeanStartEnd, StartEndSamples, WeekdayBuckets,
};

/// Bucket every record's signed presence interval into the slot of its
/// date's weekday. All seven slots are present; weekdays without records
/// stay empty. Entries sharing a weekday accumulate in date order.
pub fn bucket_intervals(records: &DayRecords) -> WeekdayBuckets<i64> {
    let mut buckets = WeekdayBuckets::new();
    for (date, record) in records {
        buckets.push(date.weekday(), interval(record.start, record.end));
    }
    buckets
}

/// Bucket raw clock-in and clock-out offsets into parallel per-weekday
/// sample sequences.
pub fn bucket_start_end(records: &DayRecords) -> [StartEndSamples; 7] {
    let mut weekdays: [StartEndSamples; 7] = std::array::from_fn(|_| StartEndSamples::default());
    for (date, record) in records {
        let slot = &mut weekdays[date.weekday().num_days_from_monday() as usize];
        slot.start.push(seconds_since_midnight(record.start));
        slot.end.push(seconds_since_midnight(record.end));
    }
    weekdays
}

/// Arithmetic mean of `values`. An empty slice yields `0.0` rather than
/// failing on the division.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// Mean clock-in/clock-out offsets per weekday, truncated to whole seconds.
/// Weekdays with no records reduce to `{start: 0, end: 0}`.
pub fn reduce_start_end(records: &DayRecords) -> [MeanStartEnd; 7] {
    let samples = bucket_start_end(records);
    std::array::from_fn(|day| MeanStartEnd {
        start: mean(&samples[day].start) as i64,
        end: mean(&samples[day].end) as i64,
    })
}
