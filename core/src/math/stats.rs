pub struct StatsHelper;

impl StatsHelper {
    /// Plain IEEE division; a zero denominator yields an infinity or NaN.
    pub fn ratio(numerator: f64, denominator: f64) -> f64 {
        numerator / denominator
    }

    /// Caps finite values above `ceiling`. NaN, infinities and values at or
    /// below the ceiling are returned unchanged.
    pub fn clamp_upper(value: f64, ceiling: f64) -> f64 {
        if value.is_finite() && value > ceiling {
            ceiling
        } else {
            value
        }
    }
}
