// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    // Room for tick labels + axis label on the left/bottom and the title on top.
    fn default() -> Self {
        Self::new(88, 28, 52, 64)
    }
}

/// Plot rectangle in surface pixels, derived from the surface size and insets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn from_insets(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        // Keep at least one pixel of plot area on tiny surfaces.
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_rect_respects_insets() {
        let r = PlotRect::from_insets(1024, 640, &Insets::default());
        assert_eq!(r.left, 88.0);
        assert_eq!(r.right, 1024.0 - 28.0);
        assert_eq!(r.top, 52.0);
        assert_eq!(r.bottom, 640.0 - 64.0);
    }

    #[test]
    fn plot_rect_never_collapses() {
        let r = PlotRect::from_insets(10, 10, &Insets::default());
        assert!(r.width() >= 1.0);
        assert!(r.height() >= 1.0);
    }
}
