// File: crates/chart-core/src/series.rs
// Summary: Series model for line and scatter data with per-series styling.
// Notes:
// - Points are plain (x, y) pairs. A non-finite y (NaN) marks a missing
//   sample: line series break there, scatter series skip it.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Scatter, // unconnected markers
}

/// Where a series takes its colour from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ink {
    /// Next unused entry of the theme palette.
    Palette,
    /// The theme's foreground, for a neutral series that must read on any background.
    Foreground,
    Fixed(skia::Color),
}

/// Stroke used by line series (and by the legend swatch of a line series).
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    pub color: Ink,
    /// On/off lengths in pixels; `None` draws a solid line.
    pub dash: Option<Vec<f32>>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { width: 1.5, color: Ink::Palette, dash: None }
    }
}

impl LineStyle {
    pub fn solid(width: f32) -> Self {
        Self { width, ..Self::default() }
    }

    /// Dashed stroke with dash length proportional to the width.
    pub fn dashed(width: f32) -> Self {
        Self { width, color: Ink::Palette, dash: Some(vec![3.7 * width, 1.6 * width]) }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Ink::Fixed(color);
        self
    }

    /// Draw in the theme's foreground colour.
    pub fn foreground(mut self) -> Self {
        self.color = Ink::Foreground;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    /// Marker diameter (or side) in pixels.
    pub size: f32,
    pub color: Option<skia::Color>,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self { shape: MarkerShape::Circle, size: 7.0, color: None }
    }
}

impl MarkerStyle {
    pub fn circle(size: f32, color: skia::Color) -> Self {
        Self { shape: MarkerShape::Circle, size, color: Some(color) }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    /// Legend entry; unlabelled series are left out of the legend.
    pub label: Option<String>,
    pub line: LineStyle,
    pub marker: MarkerStyle,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self::with_data(series_type, Vec::new())
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            data_xy: data,
            label: None,
            line: LineStyle::default(),
            marker: MarkerStyle::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    /// Colour source of the part that is actually drawn (stroke or markers).
    pub fn ink(&self) -> Ink {
        match self.series_type {
            SeriesType::Line => self.line.color,
            SeriesType::Scatter => self.marker.color.map_or(Ink::Palette, Ink::Fixed),
        }
    }

    /// Points with both coordinates finite.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Runs of consecutive finite points; a missing sample ends a run.
    pub fn segments(&self) -> Vec<&[(f64, f64)]> {
        self.data_xy
            .split(|(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|run| !run.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_on_missing_samples() {
        let s = Series::with_data(
            SeriesType::Line,
            vec![(0.0, 1.0), (1.0, f64::NAN), (2.0, 3.0), (3.0, 4.0), (4.0, f64::NAN)],
        );
        let segs = s.segments();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0], &[(0.0, 1.0)]);
        assert_eq!(segs[1], &[(2.0, 3.0), (3.0, 4.0)]);
    }

    #[test]
    fn finite_points_skip_nan() {
        let s = Series::with_data(SeriesType::Scatter, vec![(0.0, f64::NAN), (2.0, 5.0)]);
        assert_eq!(s.finite_points().collect::<Vec<_>>(), vec![(2.0, 5.0)]);
    }

    #[test]
    fn ink_follows_series_type() {
        let red = skia::Color::from_rgb(255, 0, 0);
        let line = Series::new(SeriesType::Line).with_line(LineStyle::solid(2.0).with_color(red));
        let dots = Series::new(SeriesType::Scatter).with_line(LineStyle::solid(2.0).with_color(red));
        assert_eq!(line.ink(), Ink::Fixed(red));
        assert_eq!(dots.ink(), Ink::Palette);

        let neutral = Series::new(SeriesType::Line).with_line(LineStyle::dashed(2.0).foreground());
        assert_eq!(neutral.ink(), Ink::Foreground);
    }
}
