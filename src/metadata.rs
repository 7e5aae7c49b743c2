//! Local metadata table reader.
//!
//! Reads a comma-delimited metadata file fresh on every call and exposes a
//! bounded preview of its rows. The read is attempted directly rather than
//! preceded by an existence check, so there is no window between check and
//! open; a vanished file simply reports as not found.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

/// A bounded preview of a delimited metadata file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Outcome of a metadata read. Neither absence nor corruption is fatal;
/// both are values for the presentation layer to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataOutcome {
    Loaded(MetadataTable),
    NotFound,
    Unreadable(String),
}

/// Read the first `max_rows` data rows of the metadata file at `path`.
pub fn read_preview(path: &Path, max_rows: usize) -> MetadataOutcome {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Metadata file not found: {}", path.display());
            return MetadataOutcome::NotFound;
        }
        Err(e) => {
            warn!("Metadata file could not be loaded: {}", e);
            return MetadataOutcome::Unreadable(e.to_string());
        }
    };

    let mut lines = content.lines();
    let headers = match lines.next() {
        Some(line) => split_row(line),
        None => {
            warn!("Metadata file is empty: {}", path.display());
            return MetadataOutcome::Unreadable("file contains no header row".to_string());
        }
    };

    let rows: Vec<Vec<String>> = lines.take(max_rows).map(split_row).collect();

    debug!(
        "Loaded {} columns and {} preview rows from {}",
        headers.len(),
        rows.len(),
        path.display()
    );
    MetadataOutcome::Loaded(MetadataTable { headers, rows })
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(|field| field.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = read_preview(&dir.path().join("absent.csv"), 5);
        assert_eq!(outcome, MetadataOutcome::NotFound);
    }

    #[test]
    fn test_preview_returns_first_rows_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "flight_line,date,sensor").unwrap();
        writeln!(file, "f210101t01,2021-01-01,AVIRIS-NG").unwrap();
        writeln!(file, "f210102t01,2021-01-02,AVIRIS-NG").unwrap();
        writeln!(file, "f210103t01,2021-01-03,AVIRIS-C").unwrap();

        let outcome = read_preview(file.path(), 2);
        let MetadataOutcome::Loaded(table) = outcome else {
            panic!("expected a loaded table");
        };
        assert_eq!(table.headers, vec!["flight_line", "date", "sensor"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "f210101t01");
        assert_eq!(table.rows[1][2], "AVIRIS-NG");
    }

    #[test]
    fn test_preview_shorter_than_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a,b").unwrap();
        writeln!(file, "1,2").unwrap();

        let outcome = read_preview(file.path(), 5);
        let MetadataOutcome::Loaded(table) = outcome else {
            panic!("expected a loaded table");
        };
        assert_eq!(table.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn test_empty_file_is_unreadable() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let outcome = read_preview(file.path(), 5);
        assert!(matches!(outcome, MetadataOutcome::Unreadable(_)));
    }

    #[test]
    fn test_unreadable_path_reports_message() {
        let dir = tempfile::tempdir().unwrap();
        // A directory opens but cannot be read as a file
        let outcome = read_preview(dir.path(), 5);
        match outcome {
            MetadataOutcome::Unreadable(message) => assert!(!message.is_empty()),
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }
}
