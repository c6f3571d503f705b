// File: crates/chart-core/src/scale.rs
// Summary: Linear value <-> pixel transform for one axis.

/// Maps a data range onto a pixel range. The pixel range may be inverted
/// (screen Y grows downwards), which is how the vertical scale is built.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px0: f32,
    pub px1: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px0: f32, px1: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { px0, px1, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Horizontal scale: `vmin` at the left edge.
    pub fn horizontal(left: f32, right: f32, vmin: f64, vmax: f64) -> Self {
        Self::new(left, right, vmin, vmax)
    }

    /// Vertical scale: `vmin` at the bottom edge.
    pub fn vertical(top: f32, bottom: f32, vmin: f64, vmax: f64) -> Self {
        Self::new(bottom, top, vmin, vmax)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px0 + t as f32 * (self.px1 - self.px0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_is_inverted() {
        let s = LinearScale::vertical(10.0, 110.0, 0.0, 100.0);
        assert_eq!(s.to_px(0.0), 110.0);
        assert_eq!(s.to_px(100.0), 10.0);
        assert_eq!(s.to_px(50.0), 60.0);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = LinearScale::horizontal(0.0, 100.0, 5.0, 5.0);
        assert_eq!(s.to_px(5.0), 0.0);
        assert_eq!(s.to_px(6.0), 100.0);
    }
}
