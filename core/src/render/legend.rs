use plotters::chart::SeriesLabelPosition;

/// Plot corners the legend can be placed in, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendCorner {
    pub const ALL: [LegendCorner; 4] = [
        LegendCorner::UpperRight,
        LegendCorner::UpperLeft,
        LegendCorner::LowerLeft,
        LegendCorner::LowerRight,
    ];

    fn contains(self, nx: f64, ny: f64) -> bool {
        let right = nx >= 0.5;
        let upper = ny >= 0.5;
        match self {
            LegendCorner::UpperRight => right && upper,
            LegendCorner::UpperLeft => !right && upper,
            LegendCorner::LowerLeft => !right && !upper,
            LegendCorner::LowerRight => right && !upper,
        }
    }
}

impl From<LegendCorner> for SeriesLabelPosition {
    fn from(corner: LegendCorner) -> Self {
        match corner {
            LegendCorner::UpperRight => SeriesLabelPosition::UpperRight,
            LegendCorner::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendCorner::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendCorner::LowerRight => SeriesLabelPosition::LowerRight,
        }
    }
}

/// Picks the corner whose quadrant holds the fewest plotted vertices.
pub fn best_legend_corner<'a, I>(points: I, x_range: (f64, f64), y_range: (f64, f64)) -> LegendCorner
where
    I: IntoIterator<Item = &'a (f64, f64)>,
{
    let span_x = x_range.1 - x_range.0;
    let span_y = y_range.1 - y_range.0;
    if span_x <= 0.0 || span_y <= 0.0 {
        return LegendCorner::UpperRight;
    }

    let mut counts = [0usize; 4];
    for &(x, y) in points {
        let nx = (x - x_range.0) / span_x;
        let ny = (y - y_range.0) / span_y;
        for (count, corner) in counts.iter_mut().zip(LegendCorner::ALL) {
            if corner.contains(nx, ny) {
                *count += 1;
            }
        }
    }

    let mut best = LegendCorner::UpperRight;
    let mut best_count = counts[0];
    for (&count, corner) in counts.iter().zip(LegendCorner::ALL).skip(1) {
        if count < best_count {
            best = corner;
            best_count = count;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plot_prefers_upper_right() {
        let points: Vec<(f64, f64)> = Vec::new();
        assert_eq!(
            best_legend_corner(&points, (0.0, 10.0), (0.0, 1.0)),
            LegendCorner::UpperRight
        );
    }

    #[test]
    fn legend_avoids_crowded_corners() {
        // Everything high except a dip in the lower right.
        let points = vec![(1.0, 0.9), (4.0, 0.95), (6.0, 0.9), (9.0, 0.8), (9.5, 0.1)];
        assert_eq!(
            best_legend_corner(&points, (0.0, 10.0), (0.0, 1.0)),
            LegendCorner::LowerLeft
        );
    }

    #[test]
    fn ties_follow_corner_order() {
        let points = vec![(9.0, 0.9), (1.0, 0.1), (9.0, 0.1)];
        assert_eq!(
            best_legend_corner(&points, (0.0, 10.0), (0.0, 1.0)),
            LegendCorner::UpperLeft
        );
    }
}
