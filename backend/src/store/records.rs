//! Record-file parser.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use log::debug;

use crate::models::{AttendanceRecord, PresenceTable, UserId};

/// Fields a data row must carry: user id, date, start time, end time.
const ROW_FIELDS: usize = 4;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Errors that abort loading entirely.
///
/// Malformed rows are not errors; they surface as [`RowDiagnostic`]s on the
/// [`ParseOutcome`] instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The record file is missing or unreadable.
    #[error("cannot read presence data from {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Field of a four-field row that failed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    UserId,
    Date,
    Start,
    End,
}

impl RowField {
    fn name(self) -> &'static str {
        match self {
            RowField::UserId => "user id",
            RowField::Date => "date",
            RowField::Start => "start time",
            RowField::End => "end time",
        }
    }
}

/// Non-fatal notice about a skipped row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    /// 0-based index of the offending row in the source.
    pub row: usize,
    /// The field that failed to convert.
    pub field: RowField,
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: invalid {}", self.row, self.field.name())
    }
}

/// Parsed table plus the per-row diagnostics gathered along the way.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub table: PresenceTable,
    pub diagnostics: Vec<RowDiagnostic>,
}

/// Read comma-separated presence rows into a [`PresenceTable`].
///
/// Rows with a field count other than four (headers, footers, blank lines)
/// are ignored outright. A four-field row whose user id, date, or times fail
/// to convert is skipped with a diagnostic and a `debug` log line; later
/// rows still parse. A later row for the same user and date overwrites the
/// earlier record. Empty or fully-malformed input yields an empty table.
///
/// An I/O failure while reading is returned as-is; [`load_records`] wraps it
/// with the source path.
pub fn parse_records<R: BufRead>(reader: R) -> std::io::Result<ParseOutcome> {
    let mut outcome = ParseOutcome::default();

    for (row, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != ROW_FIELDS {
            // header and footer noise, not worth a diagnostic
            continue;
        }

        match parse_row(&fields) {
            Ok((user_id, date, record)) => {
                outcome.table.entry(user_id).or_default().insert(date, record);
            }
            Err(field) => {
                let diagnostic = RowDiagnostic { row, field };
                debug!("skipping {}", diagnostic);
                outcome.diagnostics.push(diagnostic);
            }
        }
    }

    Ok(outcome)
}

/// Load and parse the record file at `path`.
///
/// A missing or unreadable file is a hard failure; everything else degrades
/// to per-row diagnostics as described on [`parse_records`].
pub fn load_records(path: &Path) -> Result<ParseOutcome, StoreError> {
    let wrap = |source| StoreError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(wrap)?;
    parse_records(BufReader::new(file)).map_err(wrap)
}

fn parse_row(fields: &[&str]) -> Result<(UserId, NaiveDate, AttendanceRecord), RowField> {
    let user_id = fields[0]
        .trim()
        .parse::<UserId>()
        .map_err(|_| RowField::UserId)?;
    let date = NaiveDate::parse_from_str(fields[1], DATE_FORMAT).map_err(|_| RowField::Date)?;
    let start = NaiveTime::parse_from_str(fields[2], TIME_FORMAT).map_err(|_| RowField::Start)?;
    let end = NaiveTime::parse_from_str(fields[3], TIME_FORMAT).map_err(|_| RowField::End)?;
    Ok((user_id, date, AttendanceRecord { start, end }))
}
