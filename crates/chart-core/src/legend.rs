// File: crates/chart-core/src/legend.rs
// Summary: Legend model and drawing (boxed entry list anchored to the upper-right of the plot).

use skia_safe as skia;

use crate::chart::{draw_marker, fill_paint, stroke_paint};
use crate::series::{MarkerShape, SeriesType};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::PlotRect;

/// One legend row, with the colour already resolved against the theme.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub kind: SeriesType,
    pub color: skia::Color,
    pub line_width: f32,
    pub dash: Option<Vec<f32>>,
    pub marker: MarkerShape,
    pub marker_size: f32,
}

const MARGIN: f32 = 10.0;
const PADDING: f32 = 8.0;
const FONT_SIZE: f32 = 13.0;
const LINE_HEIGHT: f32 = 20.0;
const SWATCH_WIDTH: f32 = 32.0;
const SWATCH_GAP: f32 = 8.0;

pub(crate) fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    items: &[LegendItem],
    plot: &PlotRect,
    theme: &Theme,
    draw_labels: bool,
) {
    if items.is_empty() {
        return;
    }

    let text_width = if draw_labels {
        items.iter().map(|i| shaper.measure_width(&i.label, FONT_SIZE)).fold(0.0_f32, f32::max)
    } else {
        0.0
    };
    let inner_width = SWATCH_WIDTH + SWATCH_GAP + text_width;
    let inner_height = items.len() as f32 * LINE_HEIGHT;

    let rect = skia::Rect::from_ltrb(
        plot.right - MARGIN - inner_width - PADDING * 2.0,
        plot.top + MARGIN,
        plot.right - MARGIN,
        plot.top + MARGIN + inner_height + PADDING * 2.0,
    );
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(theme.legend_background));
    canvas.draw_round_rect(rect, 4.0, 4.0, &stroke_paint(theme.legend_border, 1.0, None));

    for (i, item) in items.iter().enumerate() {
        let cy = rect.top + PADDING + i as f32 * LINE_HEIGHT + LINE_HEIGHT * 0.5;
        let x0 = rect.left + PADDING;

        match item.kind {
            SeriesType::Line => {
                let paint = stroke_paint(item.color, item.line_width, item.dash.as_deref());
                canvas.draw_line((x0, cy), (x0 + SWATCH_WIDTH, cy), &paint);
            }
            SeriesType::Scatter => {
                let center = skia::Point::new(x0 + SWATCH_WIDTH * 0.5, cy);
                draw_marker(canvas, center, item.marker, item.marker_size, &fill_paint(item.color));
            }
        }

        if draw_labels {
            shaper.draw(
                canvas,
                &item.label,
                x0 + SWATCH_WIDTH + SWATCH_GAP,
                cy,
                FONT_SIZE,
                theme.axis_label,
                Anchor::Left,
                false,
            );
        }
    }
}
