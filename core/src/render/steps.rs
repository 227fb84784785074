/// Builds the polyline of a "steps-pre" plot.
///
/// The value `ys[i]` holds over `(xs[i-1], xs[i]]`, so the vertices are
/// `(x0, y0), (x0, y1), (x1, y1), (x1, y2), ...`. A sample with a non-finite
/// value leaves its own interval undrawn and ends the current segment; the
/// next finite sample still covers `(xs[i-1], xs[i]]` as long as `xs[i-1]`
/// is finite.
pub fn step_segments(xs: &[f64], ys: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    let mut previous_x: Option<f64> = None;

    for (&x, &y) in xs.iter().zip(ys) {
        if !x.is_finite() || !y.is_finite() {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            previous_x = x.is_finite().then_some(x);
            continue;
        }

        if let Some(px) = previous_x {
            current.push((px, y));
        }
        current.push((x, y));
        previous_x = Some(x);
    }

    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
