//! Core ingestion, metric derivation and rendering for replay monitoring logs.
//!
//! The modules mirror the monitoring post-processing flow: a log is loaded
//! into a [`MonitorTable`], transformed by processing stages that derive the
//! efficiency metrics, and rendered as a step plot.

pub mod ingest;
pub mod math;
pub mod monitor;
pub mod prelude;
pub mod processing;
pub mod render;
pub mod telemetry;

pub use monitor::{Efficiencies, MonitorRecord, MonitorTable};
pub use prelude::{ProcessingStage, StageInput, StageOutput};
