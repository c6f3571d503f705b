// File: crates/chart-core/src/view.rs
// View state: visible ranges derived from series data.

use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Exact extents of all finite points, or `None` when there are none.
    pub fn data_extents(chart: &Chart) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for (x, y) in s.finite_points() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return None;
        }
        Some(Self { x_min, x_max, y_min, y_max })
    }

    /// Extents padded by `margin` (fraction of the span) on every side.
    /// Empty charts get a unit view; zero-width spans are widened by one unit.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let Some(mut v) = Self::data_extents(chart) else {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        };
        if (v.x_max - v.x_min).abs() < 1e-9 { v.x_min -= 0.5; v.x_max += 0.5; }
        if (v.y_max - v.y_min).abs() < 1e-9 { v.y_min -= 0.5; v.y_max += 0.5; }
        let xm = (v.x_max - v.x_min) * margin;
        let ym = (v.y_max - v.y_min) * margin;
        Self { x_min: v.x_min - xm, x_max: v.x_max + xm, y_min: v.y_min - ym, y_max: v.y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
