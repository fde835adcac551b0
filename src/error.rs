use std::path::PathBuf;

use cell_grid::{CentroidError, MappingError};
use thiserror::Error;

/// Errors loading or processing one tuning/test sample.
///
/// A sample either fully loads or fails outright; there is no partial
/// recovery within a sample.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write debug crop {path}: {source}")]
    ImageEncode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("invalid mapping file {path}: {source}")]
    Mapping {
        path: PathBuf,
        source: MappingError,
    },
}

/// Errors aborting a calibration run.
#[derive(Debug, Error)]
pub enum CalibrateError {
    #[error("sample error: {0}")]
    Sample(#[from] SampleError),

    #[error("calibration data incomplete: {0}")]
    Centroid(#[from] CentroidError),

    #[error("no tuning samples found under {root} (expected field_* directories)")]
    NoSamples { root: PathBuf },
}
