use crate::monitor::record::{Metric, MonitorRecord};
use serde::Serialize;

/// Ordered sequence of monitoring records; the vector position is the row index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonitorTable {
    records: Vec<MonitorRecord>,
}

impl MonitorTable {
    pub fn new(records: Vec<MonitorRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MonitorRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [MonitorRecord] {
        &mut self.records
    }

    pub fn first(&self) -> Option<&MonitorRecord> {
        self.records.first()
    }

    /// Inserts a record ahead of all others, shifting every index by one.
    pub fn prepend(&mut self, record: MonitorRecord) {
        self.records.insert(0, record);
    }

    pub fn times(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.time).collect()
    }

    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.records.iter().map(|r| r.metric(metric)).collect()
    }

    /// Largest finite timestamp, if any.
    pub fn max_time(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.time)
            .filter(|t| t.is_finite())
            .fold(None, |acc: Option<f64>, t| Some(acc.map_or(t, |m| m.max(t))))
    }
}
