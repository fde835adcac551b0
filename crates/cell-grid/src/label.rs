//! Cell types, their single-character labels, and mapping-file parsing.
//!
//! Mapping files are text grids of single-character labels, row-major,
//! whitespace-delimited, one row per line:
//!
//! ```text
//! e e r r s b
//! g g b e e s
//! ...
//! ```

use crate::error::{LabelError, MappingError};
use crate::GRID_SIZE;

/// The discrete classification of one grid square.
///
/// A closed enumeration: every mapping-file label and every classifier
/// output is one of these five variants. [`CellType::ALL`] fixes the
/// canonical iteration order, which is also the classifier's tie-break
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// An empty square.
    Empty,
    /// A skull piece.
    Skull,
    /// A red gem.
    Red,
    /// A green gem.
    Green,
    /// A blue gem.
    Blue,
}

impl CellType {
    /// All variants in canonical order.
    pub const ALL: [CellType; 5] = [
        CellType::Empty,
        CellType::Skull,
        CellType::Red,
        CellType::Green,
        CellType::Blue,
    ];

    /// Number of variants.
    pub const COUNT: usize = Self::ALL.len();

    /// The variant's slot in enumeration-keyed tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Map a single-character label to its cell type.
    ///
    /// Fails with [`LabelError::UnknownLabel`] for any character outside
    /// `{e, s, r, g, b}`; an unrecognized label is a fatal input error and
    /// must never silently default to a type.
    pub fn from_label(label: char) -> Result<Self, LabelError> {
        match label {
            'e' => Ok(CellType::Empty),
            's' => Ok(CellType::Skull),
            'r' => Ok(CellType::Red),
            'g' => Ok(CellType::Green),
            'b' => Ok(CellType::Blue),
            other => Err(LabelError::UnknownLabel(other)),
        }
    }

    /// The variant's canonical single-character label.
    ///
    /// Total over the enumeration; the inverse of [`CellType::from_label`].
    #[inline]
    pub const fn label(self) -> char {
        match self {
            CellType::Empty => 'e',
            CellType::Skull => 's',
            CellType::Red => 'r',
            CellType::Green => 'g',
            CellType::Blue => 'b',
        }
    }

    /// Human-readable name, used in reports and errors.
    pub const fn name(self) -> &'static str {
        match self {
            CellType::Empty => "empty",
            CellType::Skull => "skull",
            CellType::Red => "red",
            CellType::Green => "green",
            CellType::Blue => "blue",
        }
    }
}

/// Parse a mapping file's text into a `GRID_SIZE` by `GRID_SIZE` grid of
/// cell types.
///
/// Lines are trimmed and blank lines skipped (mapping files usually end
/// with a trailing newline); each remaining line is split on whitespace
/// into single-character label tokens. The grid shape is validated: a
/// mapping with the wrong number of rows or tokens fails with
/// [`MappingError::WrongRowCount`] / [`MappingError::WrongTokenCount`]
/// instead of corrupting downstream indexing.
///
/// # Example
///
/// ```
/// use cell_grid::{parse_mapping, CellType};
///
/// let text = "e e e e e e\n\
///             s s s s s s\n\
///             r r r r r r\n\
///             g g g g g g\n\
///             b b b b b b\n\
///             e s r g b e\n";
/// let grid = parse_mapping(text).unwrap();
/// assert_eq!(grid[1][0], CellType::Skull);
/// assert_eq!(grid[5][4], CellType::Blue);
/// ```
pub fn parse_mapping(text: &str) -> Result<Vec<Vec<CellType>>, MappingError> {
    let mut rows = Vec::with_capacity(GRID_SIZE);
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let row_idx = rows.len();
        let mut row = Vec::with_capacity(GRID_SIZE);
        for token in line.split_whitespace() {
            let mut chars = token.chars();
            let (Some(label), None) = (chars.next(), chars.next()) else {
                return Err(MappingError::UnknownToken {
                    row: row_idx,
                    token: token.to_string(),
                });
            };
            let cell_type = CellType::from_label(label).map_err(|_| MappingError::UnknownToken {
                row: row_idx,
                token: token.to_string(),
            })?;
            row.push(cell_type);
        }
        if row.len() != GRID_SIZE {
            return Err(MappingError::WrongTokenCount {
                row: row_idx,
                expected: GRID_SIZE,
                found: row.len(),
            });
        }
        rows.push(row);
    }
    if rows.len() != GRID_SIZE {
        return Err(MappingError::WrongRowCount {
            expected: GRID_SIZE,
            found: rows.len(),
        });
    }
    Ok(rows)
}
