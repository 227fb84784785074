pub mod loader;

pub use loader::{load_monitor_log, parse_monitor_log, IngestError, NANOS_TO_SECONDS};
