//! fieldlens - puzzle field recognition
//!
//! Classifies screenshots of a 6x6 puzzle field into cell types by average
//! color. Calibration builds a per-type centroid table from labeled tuning
//! grids; classification assigns each cell of an unlabeled grid the nearest
//! centroid. This crate owns the application concerns (configuration,
//! filesystem sample discovery, image decoding, debug output, reporting);
//! the pure classification core lives in `cell-grid`. The library surface
//! exists so integration tests can drive the full pipeline.

pub mod error;
pub mod models;
pub mod services;
