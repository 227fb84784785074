pub mod anchor;
pub mod efficiency;

pub use anchor::AnchorStage;
pub use efficiency::EfficiencyStage;

use crate::monitor::MonitorTable;
use crate::prelude::{ProcessingStage, StageConfig, StageInput, StageMetadata, StageResult};

/// Result of running every transformer stage over a table.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub table: MonitorTable,
    pub metadata: StageMetadata,
}

/// Derives the efficiency columns and prepends the zero-time row.
pub fn transform(table: MonitorTable, config: &StageConfig) -> StageResult<TransformOutput> {
    let mut efficiency = EfficiencyStage::new();
    efficiency.initialize(config)?;
    let derived = efficiency.execute(StageInput { table })?;
    efficiency.cleanup();

    let mut anchor = AnchorStage::new();
    anchor.initialize(config)?;
    let anchored = anchor.execute(StageInput {
        table: derived.table,
    })?;
    anchor.cleanup();

    let mut metadata = derived.metadata;
    metadata.notes.extend(anchored.metadata.notes);

    Ok(TransformOutput {
        table: anchored.table,
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_monitor_log;
    use crate::monitor::MonitorRecord;

    fn is_non_decreasing(values: &[f64]) -> bool {
        values.windows(2).all(|pair| pair[0] <= pair[1])
    }

    const HEADER: &str = "time ideal_max ideal_avg useful_max useful_avg elapsed ideal_loc nevts_min\n";

    #[test]
    fn single_sample_log_produces_anchored_two_row_table() {
        let text = format!("{HEADER}1000000000 10 8 10 5 12 1 1\n");
        let table = parse_monitor_log(&text).unwrap();
        let output = transform(table, &StageConfig::default()).unwrap();

        let rows = output.table.records();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time, 0.0);
        assert_eq!(rows[1].time, 1.0);
        assert_eq!(rows[1].lb, 0.5);
        assert_eq!(rows[1].ser, 1.0);
        assert!((rows[1].trf - 10.0 / 12.0).abs() < 1e-12);
        assert_eq!(rows[0].efficiencies(), rows[1].efficiencies());
    }

    #[test]
    fn transform_keeps_metrics_in_unit_range_and_time_monotonic() {
        let records = (1..=6)
            .map(|i| {
                let i = i as f64;
                MonitorRecord::from_columns([i, 3.0 * i, 2.0 * i, 4.0 * i, i, 2.5 * i, 1.0, 1.0])
            })
            .collect();
        let output = transform(MonitorTable::new(records), &StageConfig::default()).unwrap();

        assert_eq!(output.table.len(), 7);
        assert!(is_non_decreasing(&output.table.times()));
        for row in output.table.records() {
            for value in [row.lb, row.ser, row.trf] {
                assert!((0.0..=1.0).contains(&value), "value {value} out of range");
            }
        }
    }

    #[test]
    fn transform_rejects_empty_table() {
        assert!(transform(MonitorTable::default(), &StageConfig::default()).is_err());
    }
}
