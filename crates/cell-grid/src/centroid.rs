//! Per-type color aggregation and the centroid table.
//!
//! Calibration accumulates one color sample per labeled cell center into a
//! [`CentroidAccumulator`], then reduces to a [`CentroidTable`]: one
//! representative color per cell type. The table is the trained model; it is
//! built once per run and never mutated afterwards.

use crate::color::Rgba;
use crate::error::CentroidError;
use crate::label::CellType;

/// Running per-type, per-channel sums of calibration color samples.
///
/// The online sum-and-count form produces exactly the same integer result
/// as collecting every sample and dividing at the end (`sum / count`,
/// truncating), without retaining the samples.
///
/// # Example
///
/// ```
/// use cell_grid::{CellType, CentroidAccumulator, Rgba};
///
/// let mut acc = CentroidAccumulator::new();
/// acc.add(CellType::Skull, Rgba::new(10, 10, 10, 255));
/// acc.add(CellType::Skull, Rgba::new(20, 20, 20, 255));
/// assert_eq!(acc.count(CellType::Skull), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CentroidAccumulator {
    sums: [[u64; 4]; CellType::COUNT],
    counts: [u64; CellType::COUNT],
}

impl CentroidAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one color sample for a cell type.
    pub fn add(&mut self, cell_type: CellType, color: Rgba) {
        let idx = cell_type.index();
        let [r, g, b, a] = color.to_bytes();
        self.sums[idx][0] += r as u64;
        self.sums[idx][1] += g as u64;
        self.sums[idx][2] += b as u64;
        self.sums[idx][3] += a as u64;
        self.counts[idx] += 1;
    }

    /// Number of samples recorded so far for a cell type.
    pub fn count(&self, cell_type: CellType) -> u64 {
        self.counts[cell_type.index()]
    }

    /// Total samples recorded across all types.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Reduce to one centroid color per type.
    ///
    /// Each channel is the truncated integer mean of that type's samples.
    /// Fails with [`CentroidError::MissingType`] if any cell type received
    /// zero samples; an incomplete centroid table cannot classify, so this
    /// is a fatal configuration error rather than a recoverable one.
    pub fn finish(self) -> Result<CentroidTable, CentroidError> {
        let mut colors = [Rgba::new(0, 0, 0, 0); CellType::COUNT];
        for cell_type in CellType::ALL {
            let idx = cell_type.index();
            let count = self.counts[idx];
            if count == 0 {
                return Err(CentroidError::MissingType(cell_type));
            }
            let s = self.sums[idx];
            colors[idx] = Rgba::new(
                (s[0] / count) as u8,
                (s[1] / count) as u8,
                (s[2] / count) as u8,
                (s[3] / count) as u8,
            );
        }
        Ok(CentroidTable { colors })
    }
}

/// One representative color per cell type: the trained model.
///
/// Keyed by [`CellType::index`], so lookups are total over the enumeration
/// with no possibility of a missing entry. Immutable after construction;
/// built once per calibration run and read for the rest of the process
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CentroidTable {
    colors: [Rgba; CellType::COUNT],
}

impl CentroidTable {
    /// Build a table directly from per-type colors, in [`CellType::ALL`]
    /// order. Mostly useful for tests and preset models; calibration goes
    /// through [`CentroidAccumulator`].
    pub const fn from_colors(colors: [Rgba; CellType::COUNT]) -> Self {
        Self { colors }
    }

    /// The centroid color for a cell type.
    #[inline]
    pub fn get(&self, cell_type: CellType) -> Rgba {
        self.colors[cell_type.index()]
    }

    /// Iterate `(cell_type, centroid)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CellType, Rgba)> + '_ {
        CellType::ALL.iter().map(move |&t| (t, self.get(t)))
    }
}
