// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (RGBA/PNG) using Skia CPU raster surfaces.

use std::path::Path;

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use skia_safe as skia;

use crate::error::{RenderError, Result};
use crate::grid::nice_ticks;
use crate::legend::{draw_legend, LegendItem};
use crate::scale::LinearScale;
use crate::series::{Ink, MarkerShape, Series, SeriesType};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

/// Padding, as a fraction of the data span, added on each side of autoscaled axes.
pub const DEFAULT_MARGIN: f64 = 0.05;

const TICK_COUNT: u32 = 8;
const TICK_LEN: f32 = 5.0;
const TICK_FONT: f32 = 11.0;
const LABEL_FONT: f32 = 14.0;
const TITLE_FONT: f32 = 17.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, axis labels, tick labels, legend labels). Off gives
    /// pixel-stable output across machines with different fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Unpremultiplied RGBA8 pixels, row-major, `stride` bytes per row.
#[derive(Clone, Debug)]
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl RgbaFrame {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = y as usize * self.stride + x as usize * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(&self.pixels, self.width, self.height, ExtendedColorType::Rgba8)?;
        Ok(out)
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Series are drawn in insertion order; later series paint over earlier ones.
    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data, padded by `margin` of the span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Colour of each series against `theme`. Fixed and foreground colours
    /// do not consume palette entries; the rest take the next one in order.
    pub fn resolved_colors(&self, theme: &Theme) -> Vec<skia::Color> {
        let mut auto = 0usize;
        self.series
            .iter()
            .map(|s| match s.ink() {
                Ink::Fixed(c) => c,
                Ink::Foreground => theme.foreground,
                Ink::Palette => {
                    let c = theme.cycle_color(auto);
                    auto += 1;
                    c
                }
            })
            .collect()
    }

    /// Legend rows for every labelled series, in draw order.
    pub fn legend_items(&self, theme: &Theme) -> Vec<LegendItem> {
        self.series
            .iter()
            .zip(self.resolved_colors(theme))
            .filter_map(|(s, color)| {
                let label = s.label.clone()?;
                Some(LegendItem {
                    label,
                    kind: s.series_type,
                    color,
                    line_width: s.line.width,
                    dash: s.line.dash.clone(),
                    marker: s.marker.shape,
                    marker_size: s.marker.size,
                })
            })
            .collect()
    }

    /// Render to an RGBA8 buffer using a CPU raster surface.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<RgbaFrame> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Readback);
        }
        Ok(RgbaFrame { pixels, width: opts.width as u32, height: opts.height as u32, stride })
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render_to_rgba8(opts)?.encode_png()
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    /// The image is fully encoded before the file is opened.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path.as_ref(), &bytes)
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let plot = PlotRect::from_insets(opts.width, opts.height, &opts.insets);
        let sx = LinearScale::horizontal(plot.left, plot.right, self.x_axis.min, self.x_axis.max);
        let sy = LinearScale::vertical(plot.top, plot.bottom, self.y_axis.min, self.y_axis.max);
        let shaper = TextShaper::new();

        canvas.clear(theme.background);
        canvas.draw_rect(
            skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom),
            &fill_paint(theme.plot_background),
        );

        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &sx, &sy, theme);

        // Series, clipped to the plot area
        let colors = self.resolved_colors(theme);
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom),
            skia::ClipOp::Intersect,
            true,
        );
        for (s, color) in self.series.iter().zip(colors) {
            match s.series_type {
                SeriesType::Line => draw_line_series(canvas, &sx, &sy, s, color),
                SeriesType::Scatter => draw_scatter_series(canvas, &sx, &sy, s, color),
            }
        }
        canvas.restore();

        draw_axes(canvas, &plot, &self.x_axis, &self.y_axis, &sx, &sy, theme, &shaper, opts.draw_labels);

        if opts.draw_labels {
            if let Some(title) = &self.title {
                shaper.draw(
                    canvas,
                    title,
                    plot.center_x(),
                    plot.top * 0.5,
                    TITLE_FONT,
                    theme.title,
                    Anchor::Center,
                    true,
                );
            }
        }

        if self.legend {
            draw_legend(canvas, &shaper, &self.legend_items(theme), &plot, theme, opts.draw_labels);
        }
    }
}

/// Write already-encoded PNG bytes to `path`, creating missing parent directories.
pub fn write_png(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |source| RenderError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, bytes).map_err(io_err)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

pub(crate) fn stroke_paint(color: skia::Color, width: f32, dash: Option<&[f32]>) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    if let Some(intervals) = dash {
        // Skia wants an even number of positive intervals.
        if intervals.len() >= 2 && intervals.len() % 2 == 0 {
            paint.set_path_effect(skia::PathEffect::dash(intervals, 0.0));
        }
    }
    paint
}

pub(crate) fn draw_marker(
    canvas: &skia::Canvas,
    center: skia::Point,
    shape: MarkerShape,
    size: f32,
    paint: &skia::Paint,
) {
    let half = size * 0.5;
    match shape {
        MarkerShape::Circle => {
            canvas.draw_circle(center, half, paint);
        }
        MarkerShape::Square => {
            let rect = skia::Rect::from_ltrb(center.x - half, center.y - half, center.x + half, center.y + half);
            canvas.draw_rect(rect, paint);
        }
    }
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x: &Axis,
    y: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    let paint = stroke_paint(theme.grid, 1.0, None);

    // verticals
    for v in nice_ticks(x.min, x.max, TICK_COUNT).values {
        let px = sx.to_px(v);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    // horizontals
    for v in nice_ticks(y.min, y.max, TICK_COUNT).values {
        let py = sy.to_px(v);
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    x: &Axis,
    y: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
    shaper: &TextShaper,
    draw_labels: bool,
) {
    let axis_paint = stroke_paint(theme.axis_line, 1.0, None);

    // Frame around the plot area
    canvas.draw_rect(skia::Rect::from_ltrb(plot.left, plot.top, plot.right, plot.bottom), &axis_paint);

    let tick_paint = stroke_paint(theme.tick, 1.0, None);

    let x_ticks = nice_ticks(x.min, x.max, TICK_COUNT);
    for &v in &x_ticks.values {
        let px = sx.to_px(v);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + TICK_LEN), &tick_paint);
        if draw_labels {
            let label = x_ticks.label(v);
            shaper.draw(canvas, &label, px, plot.bottom + TICK_LEN + 10.0, TICK_FONT, theme.tick, Anchor::Center, false);
        }
    }

    let y_ticks = nice_ticks(y.min, y.max, TICK_COUNT);
    for &v in &y_ticks.values {
        let py = sy.to_px(v);
        canvas.draw_line((plot.left - TICK_LEN, py), (plot.left, py), &tick_paint);
        if draw_labels {
            let label = y_ticks.label(v);
            shaper.draw(canvas, &label, plot.left - TICK_LEN - 4.0, py, TICK_FONT, theme.tick, Anchor::Right, false);
        }
    }

    if draw_labels {
        shaper.draw(
            canvas,
            &x.label,
            plot.center_x(),
            plot.bottom + TICK_LEN + 36.0,
            LABEL_FONT,
            theme.axis_label,
            Anchor::Center,
            false,
        );
        shaper.draw_vertical(canvas, &y.label, plot.left - 66.0, plot.center_y(), LABEL_FONT, theme.axis_label);
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, color: skia::Color) {
    let paint = stroke_paint(color, series.line.width, series.line.dash.as_deref());

    for run in series.segments() {
        if run.len() < 2 {
            continue;
        }
        let mut path = skia::Path::new();
        let (x0, y0) = run[0];
        path.move_to((sx.to_px(x0), sy.to_px(y0)));
        for &(x, y) in run.iter().skip(1) {
            path.line_to((sx.to_px(x), sy.to_px(y)));
        }
        canvas.draw_path(&path, &paint);
    }
}

fn draw_scatter_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, color: skia::Color) {
    let paint = fill_paint(color);
    for (x, y) in series.finite_points() {
        let center = skia::Point::new(sx.to_px(x), sy.to_px(y));
        draw_marker(canvas, center, series.marker.shape, series.marker.size, &paint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{LineStyle, MarkerStyle};

    #[test]
    fn auto_colors_skip_explicit_series() {
        let mut chart = Chart::new();
        let black = skia::Color::from_rgb(0, 0, 0);
        chart.add_series(Series::new(SeriesType::Line).with_line(LineStyle::dashed(2.0).with_color(black)));
        chart.add_series(Series::new(SeriesType::Line));
        chart.add_series(Series::new(SeriesType::Line));
        let theme = Theme::light();
        let colors = chart.resolved_colors(&theme);
        assert_eq!(colors, vec![black, theme.cycle_color(0), theme.cycle_color(1)]);
    }

    #[test]
    fn foreground_ink_follows_theme() {
        let mut chart = Chart::new();
        chart.add_series(Series::new(SeriesType::Line).with_line(LineStyle::dashed(2.5).foreground()));
        chart.add_series(Series::new(SeriesType::Line));
        let (light, dark) = (Theme::light(), Theme::dark());
        assert_eq!(chart.resolved_colors(&light), vec![light.foreground, light.cycle_color(0)]);
        assert_eq!(chart.resolved_colors(&dark), vec![dark.foreground, dark.cycle_color(0)]);
    }

    #[test]
    fn legend_lists_only_labelled_series_in_order() {
        let mut chart = Chart::new();
        chart.add_series(Series::new(SeriesType::Line).with_label("a"));
        chart.add_series(Series::new(SeriesType::Line));
        let red = skia::Color::from_rgb(255, 0, 0);
        chart.add_series(Series::new(SeriesType::Scatter).with_label("b").with_marker(MarkerStyle::circle(6.0, red)));

        let items = chart.legend_items(&Theme::light());
        let labels = items.iter().map(|i| i.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["a", "b"]);
        assert_eq!(items[1].kind, SeriesType::Scatter);
        assert_eq!(items[1].color, red);
    }

    #[test]
    fn frame_pixel_indexing() {
        let frame = RgbaFrame { pixels: (0..16).collect(), width: 2, height: 2, stride: 8 };
        assert_eq!(frame.pixel(1, 1), [12, 13, 14, 15]);
    }
}
