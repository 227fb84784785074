use crate::prelude::{
    ProcessingStage, StageConfig, StageError, StageInput, StageMetadata, StageOutput, StageResult,
};
use crate::telemetry::log::LogManager;

/// Prepends a copy of the first sample pinned to the anchor time, so the
/// step plot starts at the origin with the first sample's values.
pub struct AnchorStage {
    config: Option<StageConfig>,
    logger: LogManager,
}

impl AnchorStage {
    pub fn new() -> Self {
        Self {
            config: None,
            logger: LogManager::new(),
        }
    }
}

impl Default for AnchorStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStage for AnchorStage {
    fn initialize(&mut self, config: &StageConfig) -> StageResult<()> {
        self.config = Some(config.clone());
        Ok(())
    }

    fn execute(&mut self, input: StageInput) -> StageResult<StageOutput> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| StageError::Internal("stage not initialized".into()))?;

        let mut table = input.table;
        let mut anchor = *table
            .first()
            .ok_or_else(|| StageError::InvalidInput("monitoring log has no samples".into()))?;
        anchor.time = config.anchor_time;
        table.prepend(anchor);

        self.logger
            .record(&format!("AnchorStage rows {}", table.len()));

        let metadata = StageMetadata {
            notes: vec![format!("anchored at t={:.3}", config.anchor_time)],
            ..Default::default()
        };

        Ok(StageOutput { table, metadata })
    }

    fn cleanup(&mut self) {
        self.config = None;
    }
}
