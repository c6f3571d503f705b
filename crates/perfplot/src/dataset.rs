// File: crates/perfplot/src/dataset.rs
// Summary: In-memory measurement table and the views derived from it (index axis, success subset, series).

use std::ops::Range;

use crate::record::{MeasurementRecord, Peer};

/// Loaded measurements, in file order. Read-only once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<MeasurementRecord>,
}

/// A row whose download succeeded, kept for the marker overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SuccessPoint {
    pub index: usize,
    pub download_time_ms: Option<f64>,
}

impl Dataset {
    pub fn new(records: Vec<MeasurementRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn records(&self) -> &[MeasurementRecord] { &self.records }

    /// Row sequence numbers; the shared X axis.
    pub fn index(&self) -> Range<usize> {
        0..self.records.len()
    }

    /// First and last index, `None` for an empty table.
    pub fn x_domain(&self) -> Option<(usize, usize)> {
        self.records.len().checked_sub(1).map(|last| (0, last))
    }

    /// Rows flagged successful, with their index and download time.
    pub fn success_subset(&self) -> Vec<SuccessPoint> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.download_success)
            .map(|(index, r)| SuccessPoint { index, download_time_ms: r.download_time_ms })
            .collect()
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.download_success).count()
    }

    /// `(index, download time)`; missing times become NaN (a gap when drawn).
    pub fn download_series(&self) -> Vec<(f64, f64)> {
        self.series_of(|r| r.download_time_ms)
    }

    pub fn latency_series(&self, peer: Peer) -> Vec<(f64, f64)> {
        self.series_of(|r| r.latency(peer))
    }

    pub fn success_series(&self) -> Vec<(f64, f64)> {
        self.success_subset()
            .into_iter()
            .map(|p| (p.index as f64, p.download_time_ms.unwrap_or(f64::NAN)))
            .collect()
    }

    fn series_of(&self, value: impl Fn(&MeasurementRecord) -> Option<f64>) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (i as f64, value(r).unwrap_or(f64::NAN)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(time: Option<f64>, ok: bool) -> MeasurementRecord {
        MeasurementRecord { download_time_ms: time, latency_ms: [Some(1.0), Some(2.0), Some(3.0), Some(4.0)], download_success: ok }
    }

    #[test]
    fn success_subset_keeps_index_and_time() {
        let ds = Dataset::new(vec![rec(Some(100.0), true), rec(Some(250.0), false), rec(Some(180.0), true)]);
        assert_eq!(
            ds.success_subset(),
            vec![
                SuccessPoint { index: 0, download_time_ms: Some(100.0) },
                SuccessPoint { index: 2, download_time_ms: Some(180.0) },
            ]
        );
        assert_eq!(ds.success_count(), 2);
    }

    #[test]
    fn success_subset_is_a_subset_of_the_index() {
        let flags = [true, false, false, true, true, false, true];
        let ds = Dataset::new(flags.iter().map(|&ok| rec(Some(1.0), ok)).collect());
        let subset = ds.success_subset();
        assert_eq!(subset.len(), flags.iter().filter(|f| **f).count());
        assert!(subset.iter().all(|p| ds.index().contains(&p.index)));
        assert!(subset.windows(2).all(|w| w[0].index < w[1].index));
    }

    #[test]
    fn domain_spans_all_rows() {
        let ds = Dataset::new((0..20).map(|_| rec(Some(1.0), false)).collect());
        assert_eq!(ds.index(), 0..20);
        assert_eq!(ds.x_domain(), Some((0, 19)));
        assert_eq!(Dataset::default().x_domain(), None);
    }

    #[test]
    fn missing_values_become_gaps() {
        let ds = Dataset::new(vec![rec(None, true), rec(Some(5.0), false)]);
        let series = ds.download_series();
        assert!(series[0].1.is_nan());
        assert_eq!(series[1], (1.0, 5.0));

        // Still a successful row even without a time.
        assert_eq!(ds.success_subset(), vec![SuccessPoint { index: 0, download_time_ms: None }]);
    }

    #[test]
    fn latency_series_follow_peer_columns() {
        let ds = Dataset::new(vec![rec(Some(1.0), true)]);
        assert_eq!(ds.latency_series(Peer::P2), vec![(0.0, 1.0)]);
        assert_eq!(ds.latency_series(Peer::P5), vec![(0.0, 4.0)]);
    }
}
