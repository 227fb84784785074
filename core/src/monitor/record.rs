use serde::{Deserialize, Serialize};

/// Column schema of a monitoring log, in file order.
pub const COLUMNS: [&str; 8] = [
    "time",
    "ideal_max",
    "ideal_avg",
    "useful_max",
    "useful_avg",
    "elapsed",
    "ideal_loc",
    "nevts_min",
];

/// One monitoring sample plus the efficiencies derived from it.
///
/// `time` is in seconds once the loader has scaled it. The derived columns
/// stay NaN until the efficiency stage has run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonitorRecord {
    pub time: f64,
    pub ideal_max: f64,
    pub ideal_avg: f64,
    pub useful_max: f64,
    pub useful_avg: f64,
    pub elapsed: f64,
    pub ideal_loc: f64,
    pub nevts_min: f64,
    #[serde(rename = "LB")]
    pub lb: f64,
    #[serde(rename = "Ser")]
    pub ser: f64,
    #[serde(rename = "Trf")]
    pub trf: f64,
}

impl MonitorRecord {
    /// Builds a record from the eight raw columns in [`COLUMNS`] order.
    pub fn from_columns(values: [f64; 8]) -> Self {
        let [time, ideal_max, ideal_avg, useful_max, useful_avg, elapsed, ideal_loc, nevts_min] =
            values;
        Self {
            time,
            ideal_max,
            ideal_avg,
            useful_max,
            useful_avg,
            elapsed,
            ideal_loc,
            nevts_min,
            lb: f64::NAN,
            ser: f64::NAN,
            trf: f64::NAN,
        }
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::LoadBalance => self.lb,
            Metric::Serialization => self.ser,
            Metric::Transfer => self.trf,
        }
    }

    pub fn efficiencies(&self) -> Efficiencies {
        Efficiencies {
            lb: self.lb,
            ser: self.ser,
            trf: self.trf,
        }
    }
}

/// The three efficiency metrics plotted over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    LoadBalance,
    Serialization,
    Transfer,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::LoadBalance, Metric::Serialization, Metric::Transfer];

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::LoadBalance => "LB",
            Metric::Serialization => "Ser",
            Metric::Transfer => "Trf",
        }
    }
}

/// A (LB, Ser, Trf) triple, e.g. whole-run reference efficiencies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Efficiencies {
    pub lb: f64,
    pub ser: f64,
    pub trf: f64,
}

impl Efficiencies {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::LoadBalance => self.lb,
            Metric::Serialization => self.ser,
            Metric::Transfer => self.trf,
        }
    }
}

impl From<[f64; 3]> for Efficiencies {
    fn from([lb, ser, trf]: [f64; 3]) -> Self {
        Self { lb, ser, trf }
    }
}
