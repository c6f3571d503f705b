// File: crates/perfplot/src/loader.rs
// Summary: Reads a measurement CSV into a `Dataset`, locating required columns by header name.

use std::io::Read;
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::DataLoadError;
use crate::record::{MeasurementRecord, Peer, DOWNLOAD_SUCCESS_COLUMN, DOWNLOAD_TIME_COLUMN, REQUIRED_COLUMNS};

/// Cell values that stand for "no measurement" in numeric columns.
const MISSING_TOKENS: [&str; 6] = ["", "null", "nan", "na", "n/a", "none"];

/// Load the measurement table at `path`.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset, DataLoadError> {
    let path = path.as_ref();
    let rdr = reader_builder()
        .from_path(path)
        .map_err(|source| DataLoadError::Open { path: path.to_path_buf(), source })?;
    let dataset = read_records(rdr, path)?;
    log::info!("loaded {} measurement(s) from {}", dataset.len(), path.display());
    Ok(dataset)
}

impl Dataset {
    /// Parse a measurement table from any reader; `origin` names it in errors.
    pub fn from_reader<R: Read>(reader: R, origin: impl AsRef<Path>) -> Result<Dataset, DataLoadError> {
        read_records(reader_builder().from_reader(reader), origin.as_ref())
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // Producers write headers like " Best Peer"; trim before matching.
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

/// Column positions of the required fields.
struct Columns {
    download_time: usize,
    latency: [usize; 4],
    success: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord, path: &Path) -> Result<Self, DataLoadError> {
        let idx = |name: &str| headers.iter().position(|h| h == name);

        let missing = REQUIRED_COLUMNS
            .iter()
            .filter(|&&name| idx(name).is_none())
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(DataLoadError::MissingColumns { path: path.to_path_buf(), missing });
        }

        // All present, checked above.
        let find = |name: &str| idx(name).unwrap_or_default();
        Ok(Self {
            download_time: find(DOWNLOAD_TIME_COLUMN),
            latency: Peer::ALL.map(|p| find(p.column())),
            success: find(DOWNLOAD_SUCCESS_COLUMN),
        })
    }
}

fn read_records<R: Read>(mut rdr: csv::Reader<R>, path: &Path) -> Result<Dataset, DataLoadError> {
    let csv_err = |source| DataLoadError::Csv { path: path.to_path_buf(), source };

    let headers = rdr.headers().map_err(csv_err)?.clone();
    log::debug!("{} headers: {:?}", path.display(), headers);
    let cols = Columns::locate(&headers, path)?;

    let mut records = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(csv_err)?;
        let line = rec.position().map(|p| p.line()).unwrap_or_default();
        let malformed = |message: String| DataLoadError::Malformed { path: path.to_path_buf(), line, message };
        let cell = |ix: usize| rec.get(ix).unwrap_or_default();

        let number = |ix: usize, column: &str| {
            parse_measurement(cell(ix)).map_err(|raw| malformed(format!("{column}: not a number: {raw:?}")))
        };

        let download_time_ms = number(cols.download_time, DOWNLOAD_TIME_COLUMN)?;
        let mut latency_ms = [None; 4];
        for peer in Peer::ALL {
            latency_ms[peer.slot()] = number(cols.latency[peer.slot()], peer.column())?;
        }
        let raw_success = cell(cols.success);
        let download_success = parse_flag(raw_success).ok_or_else(|| {
            malformed(format!("{DOWNLOAD_SUCCESS_COLUMN}: expected true/false, got {raw_success:?}"))
        })?;

        records.push(MeasurementRecord { download_time_ms, latency_ms, download_success });
    }
    Ok(Dataset::new(records))
}

/// `Ok(None)` for a missing-value token, `Err(raw)` if the cell is not numeric.
fn parse_measurement(raw: &str) -> Result<Option<f64>, String> {
    let s = raw.trim();
    if MISSING_TOKENS.iter().any(|t| s.eq_ignore_ascii_case(t)) {
        return Ok(None);
    }
    s.parse::<f64>().map(Some).map_err(|_| raw.to_string())
}

fn parse_flag(raw: &str) -> Option<bool> {
    let s = raw.trim();
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
