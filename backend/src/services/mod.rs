//! Service layer: weekday aggregation and the read-only query facade.
//!
//! Services sit between the record store and the presentation layer. The
//! aggregation functions reduce one user's records to per-weekday
//! statistics; the query facade shapes them into the ordered rows the
//! presentation layer serializes.

pub mod queries;

pub mod weekday;

pub use queries::{
    mean_time_by_weekday, start_end_by_weekday, total_time_by_weekday, users, PresenceService,
    TotalTimeRow,
};
pub use weekday::{bucket_intervals, bucket_start_end, mean, reduce_start_end};
