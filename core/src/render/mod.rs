//! Step-plot rendering of the derived efficiency metrics.
//!
//! Drawing happens into an in-memory RGB buffer through plotters; the
//! result is cropped to its content and written as TIFF. Showing the image
//! is left to the caller.

pub mod backend;
pub mod chart;
pub mod export;
pub mod legend;
pub mod steps;
pub mod style;

pub use chart::render_to_rgb;
pub use export::{crop_tight, output_path_for, render_chart, save_tiff};
pub use legend::{best_legend_corner, LegendCorner};
pub use steps::step_segments;
pub use style::{ChartStyle, SeriesStyle};

use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("drawing chart: {0}")]
    Drawing(String),
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
    #[error("writing image {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(err.to_string())
    }
}
