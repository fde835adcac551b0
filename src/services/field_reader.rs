//! Inference: classify an unlabeled field screenshot against a calibrated
//! centroid table.

use std::path::Path;

use cell_grid::{
    geometry::{cell_rect, center_rect},
    sampler::average_color,
    Cell, CentroidTable, Field, RasterBuf, GRID_SIZE,
};

use crate::error::SampleError;
use crate::services::sample_loader;

/// Classifies field images using a pre-built centroid table.
///
/// The table is written once during calibration and only read here, so a
/// single reader can classify any number of grids.
pub struct FieldReader {
    centroids: CentroidTable,
}

impl FieldReader {
    /// Create a reader over a calibrated centroid table.
    pub fn new(centroids: CentroidTable) -> Self {
        Self { centroids }
    }

    /// The centroid table this reader classifies against.
    pub fn centroids(&self) -> &CentroidTable {
        &self.centroids
    }

    /// Decode an image file and classify it as a field.
    pub fn classify_image_file(&self, path: &Path) -> Result<Field, SampleError> {
        let image = image::open(path)
            .map_err(|source| match source {
                image::ImageError::IoError(source) => SampleError::Io {
                    path: path.to_path_buf(),
                    source,
                },
                source => SampleError::ImageDecode {
                    path: path.to_path_buf(),
                    source,
                },
            })?
            .to_rgba8();
        let (width, height) = image.dimensions();
        Ok(self.classify_field(&RasterBuf::from_raw(image.into_raw(), width, height)))
    }

    /// Classify a sample directory's `image.PNG` as a field.
    pub fn classify_sample_dir(&self, sample_dir: &Path) -> Result<Field, SampleError> {
        let image = sample_loader::load_image(sample_dir)?;
        Ok(self.classify_field(&image))
    }

    /// Classify every cell of a decoded field raster.
    ///
    /// Each cell is cropped, its center averaged, and the nearest centroid
    /// taken as the cell's type. The assembled field keeps each cell's full
    /// (non-center) raster for provenance.
    pub fn classify_field(&self, image: &RasterBuf) -> Field {
        let mut cells = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
        for h in 0..GRID_SIZE {
            for w in 0..GRID_SIZE {
                let rect = cell_rect(
                    image.width(),
                    image.height(),
                    GRID_SIZE as u32,
                    h as u32,
                    w as u32,
                );
                let cell = image.view().crop(rect);
                let center = cell.crop(center_rect(rect.width, rect.height));
                let cell_type = self.centroids.nearest(average_color(&center));
                cells.push(Cell::new(cell_type, cell.to_buf()));
            }
        }
        Field::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cell_grid::{CellType, Rgba};

    fn test_table() -> CentroidTable {
        CentroidTable::from_colors([
            Rgba::new(230, 230, 230, 255), // empty
            Rgba::new(40, 40, 40, 255),    // skull
            Rgba::new(200, 10, 5, 255),    // red
            Rgba::new(10, 200, 5, 255),    // green
            Rgba::new(5, 10, 200, 255),    // blue
        ])
    }

    /// A 60x60 field whose six columns cycle through the centroid colors.
    fn striped_field() -> RasterBuf {
        let table = test_table();
        let stripe: Vec<Rgba> = CellType::ALL
            .iter()
            .map(|&t| table.get(t))
            .chain([Rgba::new(230, 230, 230, 255)])
            .collect();
        let mut data = Vec::new();
        for _y in 0..60 {
            for x in 0..60u32 {
                data.extend_from_slice(&stripe[(x / 10) as usize].to_bytes());
            }
        }
        RasterBuf::from_raw(data, 60, 60)
    }

    #[test]
    fn test_classify_field_striped_columns() {
        let reader = FieldReader::new(test_table());
        let field = reader.classify_field(&striped_field());
        for row in 0..GRID_SIZE {
            assert_eq!(field.get(row, 0).cell_type(), CellType::Empty);
            assert_eq!(field.get(row, 1).cell_type(), CellType::Skull);
            assert_eq!(field.get(row, 2).cell_type(), CellType::Red);
            assert_eq!(field.get(row, 3).cell_type(), CellType::Green);
            assert_eq!(field.get(row, 4).cell_type(), CellType::Blue);
            assert_eq!(field.get(row, 5).cell_type(), CellType::Empty);
        }
    }

    #[test]
    fn test_classified_cells_retain_raster() {
        let reader = FieldReader::new(test_table());
        let field = reader.classify_field(&striped_field());
        let cell = field.get(0, 2);
        assert_eq!(cell.image().width(), 10);
        assert_eq!(cell.image().height(), 10);
        assert_eq!(
            cell.image().view().pixel(5, 5),
            Rgba::new(200, 10, 5, 255)
        );
    }

    #[test]
    fn test_classify_image_file_missing_is_io_error() {
        let reader = FieldReader::new(test_table());
        let err = reader
            .classify_image_file(Path::new("/nonexistent/image.PNG"))
            .unwrap_err();
        assert!(matches!(err, SampleError::Io { .. }));
    }
}
