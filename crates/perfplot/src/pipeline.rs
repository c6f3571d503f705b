// File: crates/perfplot/src/pipeline.rs
// Summary: One run: load -> compose -> render -> write PNG -> optional preview.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::loader::load_csv;
use crate::plot::{build_chart, TITLE};

/// What a run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub successes: usize,
    pub output: PathBuf,
    /// Whether the preview window was actually shown.
    pub displayed: bool,
}

/// Nothing is written unless loading succeeds. The PNG is written before the
/// preview is attempted, and preview failures never fail the run.
pub fn run(config: &Config) -> Result<RunSummary> {
    let dataset = load_csv(&config.input)?;
    let chart = build_chart(&dataset);

    let frame = chart.render_to_rgba8(&config.render_options())?;
    let png = frame.encode_png()?;
    chart_core::write_png(&config.output, &png)?;
    log::info!("wrote {} ({}x{})", config.output.display(), frame.width, frame.height);

    let displayed = config.show && crate::viewer::show(&frame, TITLE);

    Ok(RunSummary {
        rows: dataset.len(),
        successes: dataset.success_count(),
        output: config.output.clone(),
        displayed,
    })
}
