use crate::monitor::{Efficiencies, MonitorTable};
use crate::render::chart::render_to_rgb;
use crate::render::style::ChartStyle;
use crate::render::RenderError;
use image::{imageops, ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Replaces the final extension of `input` with `.tiff`.
pub fn output_path_for<P: AsRef<Path>>(input: P) -> PathBuf {
    input.as_ref().with_extension("tiff")
}

/// Trims uniform `background` margins, keeping `padding` pixels of it
/// around the drawn content. Blank images are returned as is.
pub fn crop_tight(image: &RgbImage, background: Rgb<u8>, padding: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    let Some((min_x, min_y, max_x, max_y)) = bounds else {
        return image.clone();
    };

    let left = min_x.saturating_sub(padding);
    let top = min_y.saturating_sub(padding);
    let right = max_x.saturating_add(padding).min(width - 1);
    let bottom = max_y.saturating_add(padding).min(height - 1);

    imageops::crop_imm(image, left, top, right - left + 1, bottom - top + 1).to_image()
}

pub fn save_tiff<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), RenderError> {
    let path_ref = path.as_ref();
    image
        .save_with_format(path_ref, ImageFormat::Tiff)
        .map_err(|source| RenderError::Save {
            path: path_ref.to_path_buf(),
            source,
        })
}

/// Renders the chart, crops it to its content and writes it as TIFF.
pub fn render_chart<P: AsRef<Path>>(
    table: &MonitorTable,
    style: &ChartStyle,
    reference: Option<&Efficiencies>,
    path: P,
) -> Result<RgbImage, RenderError> {
    let full = render_to_rgb(table, style, reference)?;
    let background = Rgb([style.background.0, style.background.1, style.background.2]);
    let cropped = crop_tight(&full, background, style.crop_padding);
    save_tiff(&cropped, &path)?;
    log::info!(
        "wrote {}x{} chart to {}",
        cropped.width(),
        cropped.height(),
        path.as_ref().display()
    );
    Ok(cropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::MonitorRecord;
    use crate::prelude::StageConfig;
    use crate::processing::transform;
    use image::GenericImageView;
    use tempfile::tempdir;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn output_path_replaces_only_final_extension() {
        assert_eq!(output_path_for("run.v2.log"), PathBuf::from("run.v2.tiff"));
        assert_eq!(
            output_path_for("/data/mon/app.em.dat"),
            PathBuf::from("/data/mon/app.em.tiff")
        );
        assert_eq!(output_path_for("monitor"), PathBuf::from("monitor.tiff"));
    }

    #[test]
    fn crop_keeps_padding_around_content() {
        let mut image = RgbImage::from_pixel(20, 10, WHITE);
        image.put_pixel(5, 4, Rgb([0, 0, 0]));
        image.put_pixel(8, 6, Rgb([10, 20, 30]));

        let cropped = crop_tight(&image, WHITE, 2);
        assert_eq!(cropped.dimensions(), (8, 7));
        assert_eq!(*cropped.get_pixel(2, 2), Rgb([0, 0, 0]));
    }

    #[test]
    fn crop_clamps_padding_at_image_edges() {
        let mut image = RgbImage::from_pixel(6, 6, WHITE);
        image.put_pixel(0, 5, Rgb([0, 0, 0]));
        assert_eq!(crop_tight(&image, WHITE, 3).dimensions(), (4, 4));
    }

    #[test]
    fn crop_tolerates_huge_padding() {
        let mut image = RgbImage::from_pixel(6, 4, WHITE);
        image.put_pixel(4, 2, Rgb([0, 0, 0]));
        assert_eq!(crop_tight(&image, WHITE, u32::MAX).dimensions(), (6, 4));
    }

    #[test]
    fn crop_leaves_blank_image_untouched() {
        let image = RgbImage::from_pixel(4, 3, WHITE);
        assert_eq!(crop_tight(&image, WHITE, 1).dimensions(), (4, 3));
    }

    #[test]
    fn render_chart_writes_non_empty_tiff() {
        let dir = tempdir().unwrap();
        let path = output_path_for(dir.path().join("run.v2.log"));
        let records = vec![
            MonitorRecord::from_columns([1.0, 10.0, 8.0, 10.0, 5.0, 12.0, 1.0, 1.0]),
            MonitorRecord::from_columns([2.0, 12.0, 9.0, 11.0, 8.0, 14.0, 1.0, 1.0]),
        ];
        let table = transform(MonitorTable::new(records), &StageConfig::default())
            .unwrap()
            .table;
        let style = ChartStyle {
            width: 400,
            height: 260,
            ..Default::default()
        };

        let image = render_chart(&table, &style, None, &path).unwrap();
        assert!(image.width() <= 400 && image.height() <= 260);
        assert_eq!(path.file_name().unwrap(), "run.v2.tiff");
        let written = std::fs::metadata(&path).unwrap();
        assert!(written.len() > 0);

        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.width(), image.width());
    }
}
