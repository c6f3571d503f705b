// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod legend;
pub mod error;

// Colours in the public API are Skia colours.
pub use skia_safe as skia;

pub use chart::{write_png, Chart, RenderOptions, RgbaFrame, DEFAULT_MARGIN};
pub use series::{Ink, LineStyle, MarkerShape, MarkerStyle, Series, SeriesType};
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use legend::LegendItem;
pub use text::TextShaper;
pub use error::RenderError;
