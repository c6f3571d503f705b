// File: crates/chart-core/src/error.rs
// Summary: Rendering error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back pixels from raster surface")]
    Readback,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write chart image to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
