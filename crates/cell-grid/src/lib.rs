//! cell-grid: color-centroid classification of puzzle field grids
//!
//! This library classifies the cells of a fixed 6x6 puzzle field into a
//! closed set of cell types based on average color. It is the pure core of
//! the pipeline: it operates on in-memory RGBA pixel rectangles and never
//! touches image files, configuration, or the filesystem (the application
//! crate owns those concerns).
//!
//! # Pipeline
//!
//! ```text
//! tuning grids (labeled)          test grid (unlabeled)
//!     |                               |
//!     v                               v
//! geometry::cell_rect            geometry::cell_rect
//! geometry::center_rect          geometry::center_rect
//!     |                               |
//!     v                               v
//! sampler::average_color         sampler::average_color
//!     |                               |
//!     v                               v
//! CentroidAccumulator::add      CentroidTable::nearest
//!     |                               |
//!     v                               v
//! CentroidTable  --------------->  Field of classified Cells
//! ```
//!
//! # Quick Start
//!
//! ```
//! use cell_grid::{CellType, CentroidAccumulator, Rgba};
//!
//! let mut acc = CentroidAccumulator::new();
//! acc.add(CellType::Red, Rgba::new(200, 10, 5, 255));
//! acc.add(CellType::Green, Rgba::new(10, 200, 5, 255));
//! acc.add(CellType::Blue, Rgba::new(5, 10, 200, 255));
//! acc.add(CellType::Skull, Rgba::new(40, 40, 40, 255));
//! acc.add(CellType::Empty, Rgba::new(230, 230, 230, 255));
//!
//! let centroids = acc.finish().unwrap();
//! assert_eq!(centroids.nearest(Rgba::new(190, 20, 10, 255)), CellType::Red);
//! ```
//!
//! # Why the center sub-region
//!
//! The field background bleeds into each cell along its border. Averaging
//! only the inner half of the cell ([`geometry::center_rect`], a `side/4`
//! inset per axis) keeps background pixels out of the centroid samples.
//!
//! # Average color semantics
//!
//! [`sampler::average_color`] is a per-channel arithmetic mean with integer
//! truncation, i.e. a 1x1 box-filter resample. Centroids are tuned against
//! exactly this definition; a gamma-corrected or weighted average would not
//! be bit-compatible with an existing centroid table.

pub mod centroid;
pub mod classify;
pub mod color;
pub mod error;
pub mod field;
pub mod geometry;
pub mod label;
pub mod raster;
pub mod sampler;


pub use centroid::{CentroidAccumulator, CentroidTable};
pub use color::Rgba;
pub use error::{CentroidError, LabelError, MappingError};
pub use field::{Cell, Field};
pub use geometry::Rect;
pub use label::{parse_mapping, CellType};
pub use raster::{RasterBuf, RasterView};

/// Fixed grid dimension: every processed field is `GRID_SIZE` rows by
/// `GRID_SIZE` columns, and every mapping file has the same shape.
pub const GRID_SIZE: usize = 6;
