use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use crate::model::{EventCounts, EventRow, EventTable, EventType};

/// A required column is absent from the CSV header. Validated once at load
/// so event-type lookups never fail at render time.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("event table is missing column {column:?}")]
pub struct SchemaError {
    pub column: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse event table: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("line {line}: cannot parse event_date {value:?}")]
    Date { line: u64, value: String },
    #[error("line {line}: empty facility name")]
    EmptyFacility { line: u64 },
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    facility: String,
    event_date: String,
    bathroomentry: u64,
    bathroomexit: u64,
    bedentry: u64,
    bedexit: u64,
    fall: u64,
    longstay: u64,
    entry: u64,
    exit: u64,
}

/// Load the event table from a CSV file on disk. Fatal at startup; callers
/// reloading interactively surface the error instead.
pub fn load_events(path: &Path) -> Result<EventTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_events(file)?;
    log::info!(
        "loaded {} event rows across {} facilities from {}",
        table.len(),
        table.facilities().len(),
        path.display()
    );
    Ok(table)
}

/// Parse an event table from any reader. Header must contain `facility`,
/// `event_date`, and one lower-cased column per event type.
pub fn read_events<R: io::Read>(source: R) -> Result<EventTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);
    validate_header(reader.headers()?)?;

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<RawRecord>().enumerate() {
        let record = record?;
        // Header occupies line 1.
        let line = idx as u64 + 2;
        if record.facility.is_empty() {
            return Err(LoadError::EmptyFacility { line });
        }
        let event_date = parse_event_date(&record.event_date).ok_or_else(|| LoadError::Date {
            line,
            value: record.event_date.clone(),
        })?;
        rows.push(EventRow {
            facility: record.facility,
            event_date,
            counts: EventCounts {
                bathroomentry: record.bathroomentry,
                bathroomexit: record.bathroomexit,
                bedentry: record.bedentry,
                bedexit: record.bedexit,
                fall: record.fall,
                longstay: record.longstay,
                entry: record.entry,
                exit: record.exit,
            },
        });
    }
    Ok(EventTable::from_rows(rows))
}

fn validate_header(headers: &csv::StringRecord) -> Result<(), SchemaError> {
    let mut required = vec!["facility", "event_date"];
    required.extend(EventType::ALL.iter().map(|ty| ty.column()));
    for column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(SchemaError {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Accept an ISO-8601 date or datetime and strip any time-of-day component.
fn parse_event_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = value.parse::<NaiveDate>() {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "facility,event_date,bathroomentry,bathroomexit,bedentry,bedexit,fall,longstay,entry,exit";

    fn csv_of(lines: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for line in lines {
            out.push('\n');
            out.push_str(line);
        }
        out
    }

    #[test]
    fn reads_rows_with_plain_dates() {
        let data = csv_of(&[
            "North Wing,2024-03-01,0,0,1,1,2,0,4,4",
            "Annex,2024-03-02,1,1,0,0,5,2,3,3",
        ]);
        let table = read_events(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        let first = table.iter().next().unwrap();
        assert_eq!(first.facility, "North Wing");
        assert_eq!(first.counts.fall, 2);
        assert_eq!(
            first.event_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn strips_time_of_day_from_datetimes() {
        let data = csv_of(&[
            "A,2024-03-01T08:30:00,0,0,0,0,1,0,0,0",
            "B,2024-03-02 23:59:59,0,0,0,0,1,0,0,0",
            "C,2024-03-03T10:00:00Z,0,0,0,0,1,0,0,0",
        ]);
        let table = read_events(data.as_bytes()).unwrap();
        let dates: Vec<NaiveDate> = table.iter().map(|r| r.event_date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn missing_event_column_is_a_schema_error() {
        let data = "facility,event_date,bathroomentry,bathroomexit,bedentry,bedexit,fall,longstay,entry\nA,2024-03-01,0,0,0,0,0,0,0";
        match read_events(data.as_bytes()) {
            Err(LoadError::Schema(err)) => assert_eq!(err.column, "exit"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_date_reports_line_and_value() {
        let data = csv_of(&[
            "A,2024-03-01,0,0,0,0,0,0,0,0",
            "A,not-a-date,0,0,0,0,0,0,0,0",
        ]);
        match read_events(data.as_bytes()) {
            Err(LoadError::Date { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected date error, got {other:?}"),
        }
    }

    #[test]
    fn empty_facility_is_rejected() {
        let data = csv_of(&[",2024-03-01,0,0,0,0,0,0,0,0"]);
        assert!(matches!(
            read_events(data.as_bytes()),
            Err(LoadError::EmptyFacility { line: 2 })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_events(Path::new("does-not-exist.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
