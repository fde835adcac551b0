//! Integer grid geometry: cell bounding boxes and center sub-regions.
//!
//! Cell dimensions come from integer division of the image dimensions by the
//! grid size. When the image does not divide evenly, the remainder pixels on
//! the right and bottom edges are silently discarded; that loss is accepted,
//! tuned centroids depend on it staying this way.

/// An axis-aligned pixel rectangle, left/top inclusive, right/bottom
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a rectangle.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Bounding box of the cell at `(row, col)` in an `n` by `n` grid over an
/// `image_width` by `image_height` image.
///
/// Cell width is `image_width / n` and cell height `image_height / n`
/// (integer division). The box is
/// `[cell_w * col, cell_h * row, cell_w * (col + 1), cell_h * (row + 1))`.
///
/// # Example
///
/// ```
/// use cell_grid::geometry::cell_rect;
///
/// let rect = cell_rect(60, 60, 6, 2, 1);
/// assert_eq!((rect.x, rect.y, rect.width, rect.height), (10, 20, 10, 10));
/// ```
pub fn cell_rect(image_width: u32, image_height: u32, n: u32, row: u32, col: u32) -> Rect {
    let cell_width = image_width / n;
    let cell_height = image_height / n;
    Rect::new(cell_width * col, cell_height * row, cell_width, cell_height)
}

/// Center sub-region of a cell, relative to the cell's own origin.
///
/// Excludes a border of `cell_width / 4` on the left and right and
/// `cell_height / 4` on the top and bottom (integer division), keeping the
/// inner half of the cell per axis. The border exclusion keeps field
/// background pixels out of the color average.
///
/// Insets are applied symmetrically per axis: `width / 4` horizontally,
/// `height / 4` vertically. Cells smaller than 4 pixels per axis produce a
/// degenerate, possibly empty region; that case is not guarded.
pub fn center_rect(cell_width: u32, cell_height: u32) -> Rect {
    let inset_x = cell_width / 4;
    let inset_y = cell_height / 4;
    Rect::new(
        inset_x,
        inset_y,
        cell_width - 2 * inset_x,
        cell_height - 2 * inset_y,
    )
}
