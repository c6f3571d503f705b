// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

/// Categorical palette used for series without an explicit colour
/// (blue, orange, green, red, purple, brown, pink, grey, olive, cyan).
pub const CATEGORY10: [skia::Color; 10] = [
    skia::Color::new(0xff1f_77b4),
    skia::Color::new(0xffff_7f0e),
    skia::Color::new(0xff2c_a02c),
    skia::Color::new(0xffd6_2728),
    skia::Color::new(0xff94_67bd),
    skia::Color::new(0xff8c_564b),
    skia::Color::new(0xffe3_77c2),
    skia::Color::new(0xff7f_7f7f),
    skia::Color::new(0xffbc_bd22),
    skia::Color::new(0xff17_becf),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    /// Neutral ink for series drawn with `Ink::Foreground`.
    pub foreground: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; 10],
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            foreground: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(255, 235, 235, 238),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 40, 40, 48),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            palette: CATEGORY10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            foreground: skia::Color::from_argb(255, 235, 235, 240),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 245, 245, 250),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_background: skia::Color::from_argb(200, 30, 30, 36),
            legend_border: skia::Color::from_argb(255, 90, 90, 100),
            palette: CATEGORY10,
        }
    }

    /// Palette colour for the `n`-th auto-coloured series; wraps around.
    pub fn cycle_color(&self, n: usize) -> skia::Color {
        self.palette[n % self.palette.len()]
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
