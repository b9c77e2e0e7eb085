//! # Presence Analyzer Backend
//!
//! Data-loading and aggregation core for the presence analyzer.
//!
//! This crate ingests a flat record file of daily attendance events (user,
//! date, clock-in time, clock-out time) and computes per-user presence
//! statistics grouped by weekday: total seconds present, mean seconds
//! present, and mean clock-in/clock-out times. The presentation layer (HTTP
//! routing, page templates, response framing) lives outside this crate; it
//! calls the query facade with a user id and serializes the rows it gets
//! back.
//!
//! ## Features
//!
//! - **Data Loading**: Parse comma-separated presence records into a typed
//!   table, tolerating malformed rows with per-row diagnostics
//! - **Aggregation**: Bucket intervals and clock offsets into the seven
//!   weekday slots and reduce them to sums and means
//! - **Query Facade**: Ordered per-weekday report rows ready for JSON
//!   serialization, plus the user listing for the frontend dropdown
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`config`]: Record-file location, passed explicitly (no globals)
//! - [`models`]: Typed domain model — times, records, the presence table,
//!   and per-weekday accumulators
//! - [`store`]: Record-file parsing with non-fatal row diagnostics
//! - [`services`]: Weekday aggregation and the read-only query facade

pub mod config;
pub mod models;

pub mod services;

pub mod store;
