use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{CleanedRecord, PolicyEvent, RawRecord};

pub fn read_raw(path: &Path) -> Result<Vec<RawRecord>> {
    read_rows(path)
}

pub fn write_raw(path: &Path, records: &[RawRecord]) -> Result<()> {
    write_rows(path, records)
}

pub fn read_cleaned(path: &Path) -> Result<Vec<CleanedRecord>> {
    if !path.exists() {
        return Err(Error::DataNotFound(path.to_path_buf()));
    }
    read_rows(path)
}

pub fn write_cleaned(path: &Path, records: &[CleanedRecord]) -> Result<()> {
    if records.is_empty() {
        // The csv writer only emits headers alongside the first row
        ensure_parent(path)?;
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(CleanedRecord::COLUMNS)?;
        writer.flush()?;
        return Ok(());
    }
    write_rows(path, records)
}

/// A missing policy file is not an error; the dashboard just drops the overlay.
pub fn read_policy_events(path: &Path) -> Result<Vec<PolicyEvent>> {
    if !path.exists() {
        tracing::info!("No policy events at {}, overlay disabled", path.display());
        return Ok(Vec::new());
    }
    let mut events: Vec<PolicyEvent> = read_rows(path)?;
    events.sort_by_key(|e| e.date);
    Ok(events)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|e| schema_error(path, e))?);
    }
    tracing::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Rows that do not fit the expected columns are a schema problem, not an I/O one.
fn schema_error(path: &Path, err: csv::Error) -> Error {
    match err.kind() {
        csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::UnequalLengths { .. } => {
            Error::Schema(format!("{}: {}", path.display(), err))
        }
        _ => Error::Csv(err),
    }
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordType;

    #[test]
    fn test_read_raw_tolerates_archive_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.csv");
        fs::write(
            &path,
            "thread_id,title,body,created_utc,score,subreddit\n\
             p1,Hiring freeze,Frozen again,2023-02-01 10:00:00,14,jobs\n\
             p2,,,2023-02-02 11:30:00,3,recruiting\n",
        )
        .unwrap();

        let rows = read_raw(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].record_id(), "p1");
        assert_eq!(rows[0].record_type(), RecordType::Post);
        assert_eq!(rows[0].author, None);
        assert_eq!(rows[1].title, None);
        assert_eq!(rows[1].body, None);
    }

    #[test]
    fn test_read_raw_rejects_bad_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(
            &path,
            "type,thread_id,id,title,body,created_utc,score,subreddit,author\n\
             post,a,a,t,b,not-a-date,1,jobs,x\n",
        )
        .unwrap();

        match read_raw(&path) {
            Err(Error::Schema(msg)) => assert!(msg.contains("bad.csv")),
            other => panic!("expected a schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_cleaned_missing_column_is_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.csv");
        fs::write(&path, "thread_id,id,title
t1,t1,Hello
").unwrap();

        assert!(matches!(read_cleaned(&path), Err(Error::Schema(_))));
    }

    #[test]
    fn test_read_cleaned_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        assert!(matches!(read_cleaned(&path), Err(Error::DataNotFound(_))));
    }

    #[test]
    fn test_policy_events_sorted_and_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.csv");
        assert!(read_policy_events(&path).unwrap().is_empty());

        fs::write(
            &path,
            "date,label\n2025-01-20,Hiring freeze\n2024-03-27,OPM skills guidance\n",
        )
        .unwrap();
        let events = read_policy_events(&path).unwrap();
        assert_eq!(events[0].label, "OPM skills guidance");
        assert_eq!(events[1].date, chrono::NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
    }

    #[test]
    fn test_empty_cleaned_output_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cleaned.csv");
        write_cleaned(&path, &[]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("type,thread_id,id,title,body,created_utc"));
        assert!(read_cleaned(&path).unwrap().is_empty());
    }
}
