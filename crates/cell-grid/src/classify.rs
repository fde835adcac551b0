//! Nearest-centroid classification.

use crate::centroid::CentroidTable;
use crate::color::Rgba;
use crate::label::CellType;

impl CentroidTable {
    /// The cell type whose centroid is nearest to `sample` by Euclidean
    /// distance over all four channels.
    ///
    /// Linear scan over the five centroids; pure, no allocation. On an
    /// exact distance tie the first type encountered in [`CellType::ALL`]
    /// order wins — callers must not rely on a specific tie-break.
    ///
    /// # Example
    ///
    /// ```
    /// use cell_grid::{CellType, CentroidTable, Rgba};
    ///
    /// let table = CentroidTable::from_colors([
    ///     Rgba::new(230, 230, 230, 255), // empty
    ///     Rgba::new(40, 40, 40, 255),    // skull
    ///     Rgba::new(200, 0, 0, 255),     // red
    ///     Rgba::new(0, 200, 0, 255),     // green
    ///     Rgba::new(0, 0, 200, 255),     // blue
    /// ]);
    /// assert_eq!(table.nearest(Rgba::new(190, 10, 5, 255)), CellType::Red);
    /// ```
    pub fn nearest(&self, sample: Rgba) -> CellType {
        let mut best_type = CellType::ALL[0];
        let mut best_dist = f64::MAX;
        for (cell_type, centroid) in self.iter() {
            let dist = sample.distance(centroid);
            if dist < best_dist {
                best_dist = dist;
                best_type = cell_type;
            }
        }
        best_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_table() -> CentroidTable {
        CentroidTable::from_colors([
            Rgba::new(230, 230, 230, 255), // empty
            Rgba::new(40, 40, 40, 255),    // skull
            Rgba::new(200, 0, 0, 255),     // red
            Rgba::new(0, 200, 0, 255),     // green
            Rgba::new(0, 0, 200, 255),     // blue
        ])
    }

    #[test]
    fn test_centroid_classifies_as_itself() {
        let table = distinct_table();
        for (cell_type, centroid) in table.iter() {
            assert_eq!(
                table.nearest(centroid),
                cell_type,
                "centroid of {:?} must classify as {:?}",
                cell_type,
                cell_type
            );
        }
    }

    #[test]
    fn test_near_red_classifies_red() {
        let table = distinct_table();
        assert_eq!(table.nearest(Rgba::new(190, 10, 5, 255)), CellType::Red);
    }

    #[test]
    fn test_noisy_samples_recover_type() {
        let table = distinct_table();
        assert_eq!(table.nearest(Rgba::new(60, 55, 48, 255)), CellType::Skull);
        assert_eq!(table.nearest(Rgba::new(20, 30, 180, 250)), CellType::Blue);
        assert_eq!(
            table.nearest(Rgba::new(210, 225, 240, 255)),
            CellType::Empty
        );
    }

    #[test]
    fn test_tie_breaks_to_first_in_canonical_order() {
        // Two identical centroids: the earlier variant wins. Not a contract,
        // but pinned so an accidental change is visible.
        let table = CentroidTable::from_colors([
            Rgba::new(100, 100, 100, 255), // empty
            Rgba::new(100, 100, 100, 255), // skull (same color)
            Rgba::new(0, 0, 0, 255),
            Rgba::new(50, 0, 0, 255),
            Rgba::new(0, 50, 0, 255),
        ]);
        assert_eq!(
            table.nearest(Rgba::new(100, 100, 100, 255)),
            CellType::Empty
        );
    }
}
