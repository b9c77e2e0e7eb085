//! Presence record ingestion.
//!
//! Parses the comma-separated record file into the typed
//! [`PresenceTable`](crate::models::PresenceTable). Malformed input is
//! non-fatal: rows with the wrong field count are dropped as structural
//! noise, rows with unconvertible fields are dropped with a diagnostic, and
//! parsing always continues with the next row. Only a missing or unreadable
//! source file is an error.

pub mod records;


pub use records::{
    load_records, parse_records, ParseOutcome, RowDiagnostic, RowField, StoreError,
};
