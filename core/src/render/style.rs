use crate::monitor::Metric;
use plotters::style::RGBColor;

pub const LB_COLOR: RGBColor = RGBColor(0xf8, 0x76, 0x6d);
pub const SER_COLOR: RGBColor = RGBColor(0x00, 0xba, 0x38);
pub const TRF_COLOR: RGBColor = RGBColor(0x61, 0x9c, 0xff);

#[derive(Debug, Clone)]
pub struct SeriesStyle {
    pub metric: Metric,
    pub label: String,
    pub color: RGBColor,
}

/// Fixed visual configuration of the metrics chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_range: (f64, f64),
    pub line_width: u32,
    pub grid: bool,
    pub background: RGBColor,
    /// Margin kept around the content when cropping, in pixels.
    pub crop_padding: u32,
    pub title_font_size: u32,
    pub axis_font_size: u32,
    pub legend_font_size: u32,
    pub series: [SeriesStyle; 3],
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            title: "Time-resolved metrics".into(),
            x_label: "Timeline [s]".into(),
            y_label: "Metrics values".into(),
            y_range: (-0.05, 1.05),
            line_width: 2,
            grid: true,
            background: RGBColor(255, 255, 255),
            crop_padding: 10,
            title_font_size: 28,
            axis_font_size: 24,
            legend_font_size: 22,
            series: [
                SeriesStyle {
                    metric: Metric::LoadBalance,
                    label: Metric::LoadBalance.label().into(),
                    color: LB_COLOR,
                },
                SeriesStyle {
                    metric: Metric::Serialization,
                    label: Metric::Serialization.label().into(),
                    color: SER_COLOR,
                },
                SeriesStyle {
                    metric: Metric::Transfer,
                    label: Metric::Transfer.label().into(),
                    color: TRF_COLOR,
                },
            ],
        }
    }
}
