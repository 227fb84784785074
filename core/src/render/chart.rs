use crate::monitor::{Efficiencies, MonitorTable};
use crate::render::backend::TextSafeBackend;
use crate::render::legend::best_legend_corner;
use crate::render::steps::step_segments;
use crate::render::style::ChartStyle;
use crate::render::RenderError;
use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Horizontal pixel offset of a reference label from the right edge.
const REFERENCE_LABEL_SHIFT: i32 = -15;
/// Reference labels sit slightly below their line, in data units.
const REFERENCE_LABEL_DROP: f64 = 0.01;

/// Draws the metrics chart into an RGB image of `style.width` x `style.height`.
pub fn render_to_rgb(
    table: &MonitorTable,
    style: &ChartStyle,
    reference: Option<&Efficiencies>,
) -> Result<RgbImage, RenderError> {
    let (width, height) = (style.width, style.height);
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidCanvas { width, height });
    }

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let backend = BitMapBackend::with_buffer(&mut buffer, (width, height));
        let root = TextSafeBackend::new(backend).into_drawing_area();
        draw_chart(&root, table, style, reference)?;
        root.present()?;
    }

    RgbImage::from_raw(width, height, buffer).ok_or(RenderError::InvalidCanvas { width, height })
}

fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    table: &MonitorTable,
    style: &ChartStyle,
    reference: Option<&Efficiencies>,
) -> Result<(), RenderError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&style.background)?;

    let x_max = table.max_time().filter(|t| *t > 0.0).unwrap_or(1.0);
    let x_range = (0.0, x_max);
    let (y_min, y_max) = style.y_range;

    let mut chart = ChartBuilder::on(root)
        .caption(&style.title, ("sans-serif", style.title_font_size))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range.0..x_range.1, y_min..y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(style.x_label.as_str())
        .y_desc(style.y_label.as_str())
        .axis_desc_style(("sans-serif", style.axis_font_size))
        .label_style(("sans-serif", style.axis_font_size * 3 / 4));
    if !style.grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let xs = table.times();
    let mut vertices: Vec<(f64, f64)> = Vec::new();
    for series in &style.series {
        let segments = step_segments(&xs, &table.series(series.metric));
        vertices.extend(segments.iter().flatten().copied());

        let line = series.color.stroke_width(style.line_width);
        let color = series.color;
        let legend_width = style.line_width;
        let mut segments = segments.into_iter();
        chart
            .draw_series(LineSeries::new(segments.next().unwrap_or_default(), line))?
            .label(series.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(legend_width))
            });
        for segment in segments {
            chart.draw_series(LineSeries::new(segment, line))?;
        }
    }

    if let Some(reference) = reference {
        let label_style = TextStyle::from(("sans-serif", style.legend_font_size).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Bottom));
        for series in &style.series {
            let level = reference.get(series.metric);
            if !level.is_finite() {
                log::warn!("ignoring non-finite reference {} = {}", series.label, level);
                continue;
            }
            chart.draw_series(DashedLineSeries::new(
                vec![(0.0, level), (x_max, level)],
                12,
                6,
                series.color.stroke_width(1),
            ))?;
            chart.draw_series(std::iter::once(
                EmptyElement::at((x_max, level - REFERENCE_LABEL_DROP))
                    + Text::new(
                        format!("{}_full", series.label),
                        (REFERENCE_LABEL_SHIFT, 0),
                        label_style.clone(),
                    ),
            ))?;
        }
    }

    let corner = best_legend_corner(&vertices, x_range, style.y_range);
    chart
        .configure_series_labels()
        .position(corner.into())
        .margin(12)
        .label_font(("sans-serif", style.legend_font_size))
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
