// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed line/scatter series, gaps, and empty charts.

use chart_core::{Chart, Series, SeriesType, ViewState};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_data(SeriesType::Scatter, vec![(2.0, 6.0), (3.0, 0.5)]));

    chart.autoscale_axes(0.0);

    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.x_axis.max, 5.0);
    assert_eq!(chart.y_axis.min, 0.5);
    assert_eq!(chart.y_axis.max, 6.0);
}

#[test]
fn margins_pad_each_side() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (10.0, 100.0)]));
    chart.autoscale_axes(0.05);
    assert!((chart.x_axis.min + 0.5).abs() < 1e-9);
    assert!((chart.x_axis.max - 10.5).abs() < 1e-9);
    assert!((chart.y_axis.min + 5.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 105.0).abs() < 1e-9);
}

#[test]
fn missing_samples_do_not_affect_extents() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 2.0), (1.0, f64::NAN), (2.0, 4.0)]));
    let v = ViewState::data_extents(&chart).expect("finite data");
    assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (0.0, 2.0, 2.0, 4.0));
}

#[test]
fn empty_chart_falls_back_to_unit_view() {
    let mut chart = Chart::new();
    chart.add_series(Series::new(SeriesType::Line));
    assert!(ViewState::data_extents(&chart).is_none());
    chart.autoscale_axes(0.05);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
}

#[test]
fn single_point_is_widened() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Scatter, vec![(0.0, 100.0)]));
    chart.autoscale_axes(0.0);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (-0.5, 0.5));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (99.5, 100.5));
}
