//! Builders for synthetic tuning/test sample directories.

use std::path::{Path, PathBuf};

use cell_grid::{CellType, GRID_SIZE};
use image::{Rgba, RgbaImage};

/// Tile edge length for synthetic field images.
pub const CELL_PX: u32 = 16;

/// Field image edge length.
pub const FIELD_PX: u32 = CELL_PX * GRID_SIZE as u32;

/// The reference tile color for each cell type in synthetic fields.
pub fn type_color(cell_type: CellType) -> [u8; 4] {
    match cell_type {
        CellType::Empty => [230, 230, 230, 255],
        CellType::Skull => [40, 40, 40, 255],
        CellType::Red => [200, 10, 5, 255],
        CellType::Green => [10, 200, 5, 255],
        CellType::Blue => [5, 10, 200, 255],
    }
}

/// A layout covering every cell type: one row per type plus a mixed row.
pub fn covering_layout() -> [[CellType; GRID_SIZE]; GRID_SIZE] {
    use CellType::*;
    [
        [Empty; GRID_SIZE],
        [Skull; GRID_SIZE],
        [Red; GRID_SIZE],
        [Green; GRID_SIZE],
        [Blue; GRID_SIZE],
        [Empty, Skull, Red, Green, Blue, Empty],
    ]
}

/// Render a layout as a solid-tile field image using `color_of` per type.
pub fn tile_image(
    layout: &[[CellType; GRID_SIZE]; GRID_SIZE],
    color_of: impl Fn(CellType) -> [u8; 4],
) -> RgbaImage {
    RgbaImage::from_fn(FIELD_PX, FIELD_PX, |x, y| {
        let cell_type = layout[(y / CELL_PX) as usize][(x / CELL_PX) as usize];
        Rgba(color_of(cell_type))
    })
}

/// The mapping.txt text for a layout.
pub fn mapping_text(layout: &[[CellType; GRID_SIZE]; GRID_SIZE]) -> String {
    let mut text = String::new();
    for row in layout {
        let line: Vec<String> = row.iter().map(|t| t.label().to_string()).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    text
}

/// The canonical field rendering expected for a layout.
pub fn expected_rendering(layout: &[[CellType; GRID_SIZE]; GRID_SIZE]) -> String {
    mapping_text(layout).trim().to_string()
}

/// Write a `field_*` sample directory with the standard tile colors.
pub fn write_sample(
    root: &Path,
    name: &str,
    layout: &[[CellType; GRID_SIZE]; GRID_SIZE],
) -> PathBuf {
    write_sample_with_colors(root, name, layout, type_color)
}

/// Write a `field_*` sample directory with caller-chosen tile colors.
pub fn write_sample_with_colors(
    root: &Path,
    name: &str,
    layout: &[[CellType; GRID_SIZE]; GRID_SIZE],
    color_of: impl Fn(CellType) -> [u8; 4],
) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    tile_image(layout, color_of)
        .save(dir.join("image.PNG"))
        .unwrap();
    std::fs::write(dir.join("mapping.txt"), mapping_text(layout)).unwrap();
    dir
}
