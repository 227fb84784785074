use crate::math::stats::StatsHelper;
use crate::prelude::{
    ProcessingStage, StageConfig, StageError, StageInput, StageMetadata, StageOutput, StageResult,
};
use crate::telemetry::log::LogManager;

/// Derives load balance, serialization and transfer efficiency per sample.
pub struct EfficiencyStage {
    config: Option<StageConfig>,
    logger: LogManager,
}

impl EfficiencyStage {
    pub fn new() -> Self {
        Self {
            config: None,
            logger: LogManager::new(),
        }
    }
}

impl Default for EfficiencyStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStage for EfficiencyStage {
    fn initialize(&mut self, config: &StageConfig) -> StageResult<()> {
        self.config = Some(config.clone());
        Ok(())
    }

    fn execute(&mut self, input: StageInput) -> StageResult<StageOutput> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| StageError::Internal("stage not initialized".into()))?;
        let ceiling = config.clamp_ceiling;

        let mut table = input.table;
        let mut clamped = 0;
        let mut non_finite = 0;
        let mut bound = |raw: f64| {
            let value = StatsHelper::clamp_upper(raw, ceiling);
            if raw.is_finite() && raw > ceiling {
                clamped += 1;
            }
            if !value.is_finite() {
                non_finite += 1;
            }
            value
        };

        for record in table.records_mut() {
            record.lb = bound(StatsHelper::ratio(record.useful_avg, record.useful_max));
            record.ser = bound(StatsHelper::ratio(record.useful_max, record.ideal_max));
            record.trf = bound(StatsHelper::ratio(record.ideal_max, record.elapsed));
        }

        self.logger.record(&format!(
            "EfficiencyStage rows {} clamped {} non-finite {}",
            table.len(),
            clamped,
            non_finite
        ));
        if non_finite > 0 {
            self.logger
                .warn(&format!("{} derived values are not finite", non_finite));
        }

        let metadata = StageMetadata {
            clamped,
            non_finite,
            notes: vec![format!("clamp ceiling {:.3}", ceiling)],
        };

        Ok(StageOutput { table, metadata })
    }

    fn cleanup(&mut self) {
        self.config = None;
    }
}
