use crate::monitor::{MonitorRecord, MonitorTable, COLUMNS};
use std::fs;
use std::path::{Path, PathBuf};

/// Monitoring timestamps are written in nanoseconds.
pub const NANOS_TO_SECONDS: f64 = 1.0e-9;

#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    #[error("reading monitoring log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected {} columns, found {found}", COLUMNS.len())]
    ColumnCount { line: usize, found: usize },
    #[error("line {line}: column `{column}` is not a number: {value:?}")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },
}

/// Reads and parses a monitoring log from disk.
pub fn load_monitor_log<P: AsRef<Path>>(path: P) -> Result<MonitorTable, IngestError> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref).map_err(|source| IngestError::Io {
        path: path_ref.to_path_buf(),
        source,
    })?;
    let table = parse_monitor_log(&contents)?;
    log::debug!(
        "loaded {} samples from {}",
        table.len(),
        path_ref.display()
    );
    Ok(table)
}

/// Parses whitespace-separated monitoring samples.
///
/// The first line is a header and is always skipped; blank lines are ignored.
/// Timestamps are converted to seconds.
pub fn parse_monitor_log(contents: &str) -> Result<MonitorTable, IngestError> {
    let mut records = Vec::new();

    for (idx, line) in contents.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let mut record = parse_line(idx + 1, line)?;
        record.time *= NANOS_TO_SECONDS;
        records.push(record);
    }

    Ok(MonitorTable::new(records))
}

fn parse_line(line: usize, text: &str) -> Result<MonitorRecord, IngestError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != COLUMNS.len() {
        return Err(IngestError::ColumnCount {
            line,
            found: fields.len(),
        });
    }

    let mut values = [0.0f64; 8];
    for ((slot, field), column) in values.iter_mut().zip(&fields).zip(COLUMNS) {
        *slot = field.parse().map_err(|_| IngestError::InvalidNumber {
            line,
            column,
            value: field.to_string(),
        })?;
    }

    Ok(MonitorRecord::from_columns(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "time ideal_max ideal_avg useful_max useful_avg elapsed ideal_loc nevts_min\n";

    #[test]
    fn parse_skips_header_and_scales_time() {
        let text = format!(
            "{HEADER}1000000000 10 8 10 5 12 1 1\n2500000000   20 16 18 9 24 2 3\n"
        );
        let table = parse_monitor_log(&text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].time, 1.0);
        assert_eq!(table.records()[1].time, 2.5);
        assert_eq!(table.records()[1].useful_max, 18.0);
    }

    #[test]
    fn parse_accepts_scientific_notation_and_tabs() {
        let text = format!("{HEADER}1.5e9\t1e1\t8\t10\t5\t12\t1\t1\n");
        let table = parse_monitor_log(&text).unwrap();
        assert_eq!(table.records()[0].time, 1.5);
        assert_eq!(table.records()[0].ideal_max, 10.0);
    }

    #[test]
    fn parse_ignores_blank_lines() {
        let text = format!("{HEADER}\n1000000000 10 8 10 5 12 1 1\n   \n");
        assert_eq!(parse_monitor_log(&text).unwrap().len(), 1);
    }

    #[test]
    fn header_only_log_yields_empty_table() {
        assert!(parse_monitor_log(HEADER).unwrap().is_empty());
        assert!(parse_monitor_log("").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_wrong_column_count() {
        let text = format!("{HEADER}1000000000 10 8 10 5 12 1\n");
        match parse_monitor_log(&text) {
            Err(IngestError::ColumnCount { line, found }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 7);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_numeric_field() {
        let text = format!("{HEADER}1000000000 10 8 ten 5 12 1 1\n");
        match parse_monitor_log(&text) {
            Err(IngestError::InvalidNumber { column, value, .. }) => {
                assert_eq!(column, "useful_max");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "{HEADER}3000000000 10 8 10 5 12 1 1\n").unwrap();
        let table = load_monitor_log(temp.path()).unwrap();
        assert_eq!(table.records()[0].time, 3.0);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_monitor_log("/nonexistent/monitor.dat").unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
