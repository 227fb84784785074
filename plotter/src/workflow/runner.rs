use crate::workflow::config::PipelineConfig;
use anyhow::Context;
use effcore::ingest::load_monitor_log;
use effcore::processing::transform;
use effcore::render::render_chart;
use effcore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use effcore::MonitorTable;
use std::path::{Path, PathBuf};

pub struct PipelineResult {
    pub table: MonitorTable,
    pub output_path: PathBuf,
    pub image_size: (u32, u32),
    pub metrics: MetricsSnapshot,
    pub notes: Vec<String>,
}

#[derive(Clone)]
pub struct Runner {
    config: PipelineConfig,
}

impl Runner {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Loads `input`, derives the metrics and saves the chart to `output`.
    pub fn execute(&self, input: &Path, output: &Path) -> anyhow::Result<PipelineResult> {
        let logger = LogManager::new();
        let recorder = MetricsRecorder::new();

        let table = load_monitor_log(input)
            .with_context(|| format!("loading monitoring log {}", input.display()))?;
        recorder.record_loaded(table.len());

        let transformed = transform(table, &self.config.stages)
            .context("deriving efficiency metrics")?;
        recorder.record_clamped(transformed.metadata.clamped);
        recorder.record_non_finite(transformed.metadata.non_finite);

        let style = self.config.to_chart_style();
        let reference = self.config.reference();
        let image = render_chart(&transformed.table, &style, reference.as_ref(), output)
            .with_context(|| format!("rendering chart to {}", output.display()))?;

        let metrics = recorder.snapshot();
        logger.record(&format!(
            "pipeline rows {} clamped {} non-finite {}",
            metrics.rows_loaded, metrics.values_clamped, metrics.values_non_finite
        ));

        Ok(PipelineResult {
            table: transformed.table,
            output_path: output.to_path_buf(),
            image_size: image.dimensions(),
            metrics,
            notes: transformed.metadata.notes,
        })
    }
}
