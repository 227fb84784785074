use anyhow::Context;
use effcore::MonitorTable;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes every row, raw and derived columns, as a JSON array.
/// Non-finite metrics are written as `null`.
pub fn write_report(table: &MonitorTable, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, table)
        .with_context(|| format!("serializing report {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use effcore::MonitorRecord;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn report_lists_rows_with_metric_columns() {
        let mut record = MonitorRecord::from_columns([0.0, 10.0, 8.0, 10.0, 5.0, 12.0, 1.0, 1.0]);
        record.lb = 0.5;
        let table = MonitorTable::new(vec![record]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_report(&table, &path).unwrap();

        let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["LB"], 0.5);
        assert!(rows[0]["Ser"].is_null());
        assert_eq!(rows[0]["useful_avg"], 5.0);
    }
}
