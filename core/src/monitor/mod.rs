pub mod record;
pub mod table;

pub use record::{Efficiencies, Metric, MonitorRecord, COLUMNS};
pub use table::MonitorTable;
