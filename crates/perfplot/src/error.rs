// File: crates/perfplot/src/error.rs
// Summary: Error taxonomy for the plotting pipeline.

use std::path::PathBuf;

use thiserror::Error;

pub use chart_core::RenderError;

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("cannot read {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: missing required column(s): {}", path.display(), missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    #[error("{}: line {line}: {message}", path.display())]
    Malformed { path: PathBuf, line: u64, message: String },

    #[error("{}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Error, Debug)]
pub enum PerfPlotError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, PerfPlotError>;
