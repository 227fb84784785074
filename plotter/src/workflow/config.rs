use anyhow::Context;
use effcore::prelude::StageConfig;
use effcore::render::ChartStyle;
use effcore::Efficiencies;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything a pipeline run needs besides its input and output paths.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub crop_padding: u32,
    /// Whole-run (LB, Ser, Trf) drawn as dashed reference lines.
    pub reference_efficiencies: Option<[f64; 3]>,
    pub show: bool,
    pub stages: StageConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let style = ChartStyle::default();
        Self {
            width: style.width,
            height: style.height,
            title: style.title,
            crop_padding: style.crop_padding,
            reference_efficiencies: None,
            show: false,
            stages: StageConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading pipeline config {}", path_ref.display()))?;
        let config: PipelineConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing pipeline config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Applies command-line values on top of the loaded configuration.
    pub fn with_overrides(
        mut self,
        width: Option<u32>,
        height: Option<u32>,
        reference: Option<[f64; 3]>,
        show: bool,
    ) -> Self {
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
        if reference.is_some() {
            self.reference_efficiencies = reference;
        }
        self.show |= show;
        self
    }

    pub fn to_chart_style(&self) -> ChartStyle {
        ChartStyle {
            width: self.width,
            height: self.height,
            title: self.title.clone(),
            crop_padding: self.crop_padding,
            ..Default::default()
        }
    }

    pub fn reference(&self) -> Option<Efficiencies> {
        self.reference_efficiencies.map(Efficiencies::from)
    }
}
