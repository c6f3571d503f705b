// File: crates/perfplot/src/lib.rs
// Summary: Library side of perfplot: load measurement CSV, derive views, compose and render the chart.

pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod plot;
pub mod record;
pub mod viewer;

pub use config::Config;
pub use dataset::{Dataset, SuccessPoint};
pub use error::{DataLoadError, PerfPlotError};
pub use loader::load_csv;
pub use pipeline::{run, RunSummary};
pub use plot::build_chart;
pub use record::{MeasurementRecord, Peer};
