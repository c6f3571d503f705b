// File: crates/perfplot/src/plot.rs
// Summary: Composes the download-time vs. latency chart from a dataset.

use chart_core::skia::Color;
use chart_core::{Chart, LineStyle, MarkerStyle, Series, SeriesType, DEFAULT_MARGIN};

use crate::dataset::Dataset;
use crate::record::Peer;

pub const TITLE: &str = "Download Time vs. Latency with Peers";
pub const X_LABEL: &str = "Iteration";
pub const Y_LABEL: &str = "Time (ms)";
pub const DOWNLOAD_LABEL: &str = "Download Time (ms)";
pub const SUCCESS_LABEL: &str = "Successful Downloads";

const DOWNLOAD_WIDTH: f32 = 2.5;
const SUCCESS_MARKER_SIZE: f32 = 7.0;

/// Build the chart. Series order is the paint order: the dashed download
/// line, the four latency lines, then the success markers on top.
/// The download line uses the theme foreground, so it reads on light and dark.
pub fn build_chart(dataset: &Dataset) -> Chart {
    let mut chart = Chart::new().with_title(TITLE);
    chart.legend = true;

    chart.add_series(
        Series::with_data(SeriesType::Line, dataset.download_series())
            .with_label(DOWNLOAD_LABEL)
            .with_line(LineStyle::dashed(DOWNLOAD_WIDTH).foreground()),
    );

    for peer in Peer::ALL {
        chart.add_series(Series::with_data(SeriesType::Line, dataset.latency_series(peer)).with_label(peer.label()));
    }

    chart.add_series(
        Series::with_data(SeriesType::Scatter, dataset.success_series())
            .with_label(SUCCESS_LABEL)
            .with_marker(MarkerStyle::circle(SUCCESS_MARKER_SIZE, Color::RED)),
    );

    chart.autoscale_axes(DEFAULT_MARGIN);
    chart.x_axis = chart.x_axis.with_label(X_LABEL);
    chart.y_axis = chart.y_axis.with_label(Y_LABEL);
    chart
}
