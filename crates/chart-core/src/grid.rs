// File: crates/chart-core/src/grid.rs
// Summary: Tick placement for grid lines and axis labels.

/// Tick values at "nice" steps (1, 2, 2.5, 5 x 10^k) covering `[min, max]`,
/// with roughly `count` intervals. Only ticks inside the range are returned.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    /// Decimal places needed to print the step without noise.
    pub decimals: usize,
}

impl Ticks {
    pub fn label(&self, v: f64) -> String {
        // Avoid "-0" for values that round to zero.
        let v = if v.abs() < 0.5 * 10f64.powi(-(self.decimals as i32)) { 0.0 } else { v };
        format!("{:.*}", self.decimals, v)
    }
}

pub fn nice_ticks(min: f64, max: f64, count: u32) -> Ticks {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 || count == 0 {
        return Ticks { values: vec![lo], decimals: 0 };
    }

    let raw = span / f64::from(count);
    let k = raw.log10().floor();
    let base = raw / 10f64.powf(k);
    let nice_base = match base {
        b if b <= 1.0 => 1.0,
        b if b <= 2.0 => 2.0,
        b if b <= 2.5 => 2.5,
        b if b <= 5.0 => 5.0,
        _ => 10.0,
    };
    let step = nice_base * 10f64.powf(k);

    // 2.5 needs one more digit than its exponent suggests.
    let extra = if nice_base == 2.5 { 1 } else { 0 };
    let decimals = ((-k) as i32 + extra).max(0) as usize;

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    let p = 10f64.powi(decimals as i32);
    let values = (first..=last)
        .map(|i| ((i as f64 * step) * p).round() / p)
        .collect();
    Ticks { values, decimals }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_cover_range_with_round_steps() {
        let t = nice_ticks(0.0, 4800.0, 8);
        assert_eq!(t.values, vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0]);
        assert_eq!(t.decimals, 0);
    }

    #[test]
    fn ticks_stay_inside_range() {
        let t = nice_ticks(-0.95, 19.95, 10);
        assert!(t.values.iter().all(|v| *v >= -0.95 && *v <= 19.95));
        assert_eq!(t.values.first().copied(), Some(0.0));
        assert_eq!(t.values.last().copied(), Some(17.5));
        assert_eq!(t.decimals, 1);
    }

    #[test]
    fn fractional_steps_get_decimals() {
        let t = nice_ticks(0.0, 1.0, 4);
        assert_eq!(t.decimals, 2);
        assert_eq!(t.label(0.25), "0.25");
        assert_eq!(t.label(-0.0001), "0.00");
    }

    #[test]
    fn degenerate_range_yields_single_tick() {
        let t = nice_ticks(3.0, 3.0, 10);
        assert_eq!(t.values, vec![3.0]);
    }
}
