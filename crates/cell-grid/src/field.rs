//! Classified cells and the assembled field.

use std::fmt;

use crate::label::CellType;
use crate::raster::RasterBuf;
use crate::GRID_SIZE;

/// One classified grid square.
///
/// Keeps the full (non-center) cell raster it was classified from, for
/// provenance and debugging. The `level` attribute is a placeholder: no
/// algorithm for deriving a piece's level exists yet, so every cell reports
/// level 1.
#[derive(Debug, Clone)]
pub struct Cell {
    cell_type: CellType,
    level: u8,
    image: RasterBuf,
}

impl Cell {
    /// Create a classified cell from its type and source raster.
    pub fn new(cell_type: CellType, image: RasterBuf) -> Self {
        Self {
            cell_type,
            level: 1,
            image,
        }
    }

    /// The cell's classified type.
    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// The cell's level. Currently always 1; level detection is future
    /// scope.
    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// The cell raster this classification was derived from.
    #[inline]
    pub fn image(&self) -> &RasterBuf {
        &self.image
    }
}

/// A fully classified `GRID_SIZE` by `GRID_SIZE` field, row-major.
///
/// # Rendering
///
/// [`Field::render`] (also the `Display` impl) produces the canonical text
/// form: each row's labels joined by single spaces, rows joined by
/// newlines, no leading or trailing whitespace:
///
/// ```text
/// e e r r s b
/// g g b e e s
/// ...
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    cells: Vec<Cell>,
}

impl Field {
    /// Assemble a field from row-major cells.
    ///
    /// # Panics
    ///
    /// Panics unless exactly `GRID_SIZE * GRID_SIZE` cells are supplied.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        assert_eq!(
            cells.len(),
            GRID_SIZE * GRID_SIZE,
            "a field is exactly {} by {} cells",
            GRID_SIZE,
            GRID_SIZE
        );
        Self { cells }
    }

    /// The cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        assert!(row < GRID_SIZE && col < GRID_SIZE, "cell out of bounds");
        &self.cells[row * GRID_SIZE + col]
    }

    /// Iterate cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Canonical text rendering of the field's labels.
    pub fn render(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .chunks(GRID_SIZE)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.cell_type().label().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        rows.join("\n").trim().to_string()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
