use std::sync::Mutex;

/// Counters collected over one pipeline run.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub rows_loaded: usize,
    pub values_clamped: usize,
    pub values_non_finite: usize,
}

#[derive(Default)]
struct Metrics {
    rows_loaded: usize,
    values_clamped: usize,
    values_non_finite: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_loaded(&self, rows: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rows_loaded += rows;
        }
    }

    pub fn record_clamped(&self, values: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.values_clamped += values;
        }
    }

    pub fn record_non_finite(&self, values: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.values_non_finite += values;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            MetricsSnapshot {
                rows_loaded: metrics.rows_loaded,
                values_clamped: metrics.values_clamped,
                values_non_finite: metrics.values_non_finite,
            }
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
