// File: crates/perfplot/src/record.rs
// Summary: One recorded download attempt and the CSV column names it is read from.

pub const DOWNLOAD_TIME_COLUMN: &str = "Download Time (ms)";
pub const DOWNLOAD_SUCCESS_COLUMN: &str = "Download Success";

/// Peers whose latency to peer 1 is recorded, in column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Peer {
    P2,
    P3,
    P4,
    P5,
}

impl Peer {
    pub const ALL: [Peer; 4] = [Peer::P2, Peer::P3, Peer::P4, Peer::P5];

    pub const fn slot(self) -> usize {
        match self {
            Peer::P2 => 0,
            Peer::P3 => 1,
            Peer::P4 => 2,
            Peer::P5 => 3,
        }
    }

    pub const fn column(self) -> &'static str {
        match self {
            Peer::P2 => "Latency_1_2 (ms)",
            Peer::P3 => "Latency_1_3 (ms)",
            Peer::P4 => "Latency_1_4 (ms)",
            Peer::P5 => "Latency_1_5 (ms)",
        }
    }

    /// Legend label for this peer pair.
    pub const fn label(self) -> &'static str {
        match self {
            Peer::P2 => "Latency Peer 1-2 (ms)",
            Peer::P3 => "Latency Peer 1-3 (ms)",
            Peer::P4 => "Latency Peer 1-4 (ms)",
            Peer::P5 => "Latency Peer 1-5 (ms)",
        }
    }
}

/// All columns a measurement file must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    DOWNLOAD_TIME_COLUMN,
    Peer::P2.column(),
    Peer::P3.column(),
    Peer::P4.column(),
    Peer::P5.column(),
    DOWNLOAD_SUCCESS_COLUMN,
];

/// A single sample. Numeric fields are `None` where the file recorded no
/// value (failed downloads are written with a `null` time).
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementRecord {
    pub download_time_ms: Option<f64>,
    pub latency_ms: [Option<f64>; 4],
    pub download_success: bool,
}

impl MeasurementRecord {
    pub fn latency(&self, peer: Peer) -> Option<f64> {
        self.latency_ms[peer.slot()]
    }
}
