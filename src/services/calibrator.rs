//! Calibration: tuning samples in, centroid table out.

use std::path::Path;

use cell_grid::{
    geometry::{cell_rect, center_rect},
    sampler::average_color,
    CentroidAccumulator, CentroidTable, RasterBuf, RasterView, GRID_SIZE,
};

use crate::error::{CalibrateError, SampleError};
use crate::services::sample_loader;

/// Subfolder for persisted cell crops (debug output).
const CELLS_DIR: &str = "cells";

/// Subfolder for persisted cell-center crops (debug output).
const CELL_CENTERS_DIR: &str = "cell_centers";

/// Builds a [`CentroidTable`] from every tuning sample under a root folder.
///
/// For each labeled grid position the cell is cropped, its center
/// extracted, and the center's average color accumulated under the cell's
/// labeled type. The diagnostics flag is passed in explicitly so the
/// calibrator stays independently testable; when set, every cell and
/// cell-center crop is also written as a PNG under the sample directory.
pub struct Calibrator {
    save_cells: bool,
}

impl Calibrator {
    /// Create a calibrator. `save_cells` enables debug-crop persistence;
    /// it never affects the computed centroids.
    pub fn new(save_cells: bool) -> Self {
        Self { save_cells }
    }

    /// Calibrate over every `field_*` sample under `root`.
    ///
    /// Fails if the root holds no samples, if any sample fails to load,
    /// or if the combined samples leave any cell type uncovered. A failing
    /// sample aborts the whole run; there is no partial success.
    pub fn calibrate(&self, root: &Path) -> Result<CentroidTable, CalibrateError> {
        let sample_dirs = sample_loader::find_sample_dirs(root)?;
        if sample_dirs.is_empty() {
            return Err(CalibrateError::NoSamples {
                root: root.to_path_buf(),
            });
        }

        let mut acc = CentroidAccumulator::new();
        for dir in &sample_dirs {
            self.process_sample(dir, &mut acc)?;
            tracing::debug!(sample = %dir.display(), samples = acc.total(), "Processed tuning sample");
        }
        tracing::info!(
            samples = sample_dirs.len(),
            cells = acc.total(),
            "Calibration complete"
        );
        Ok(acc.finish()?)
    }

    fn process_sample(
        &self,
        sample_dir: &Path,
        acc: &mut CentroidAccumulator,
    ) -> Result<(), SampleError> {
        let image = sample_loader::load_image(sample_dir)?;
        let mapping = sample_loader::load_mapping(sample_dir)?;

        if self.save_cells {
            for sub in [CELLS_DIR, CELL_CENTERS_DIR] {
                let path = sample_dir.join(sub);
                std::fs::create_dir_all(&path)
                    .map_err(|source| SampleError::Io { path, source })?;
            }
        }

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

                if self.save_cells {
                    // File names are column-first: cell_<w>_<h>.PNG
                    let name = format!("cell_{w}_{h}.PNG");
                    save_crop(&cell, &sample_dir.join(CELLS_DIR).join(&name))?;
                    save_crop(&center, &sample_dir.join(CELL_CENTERS_DIR).join(&name))?;
                }

                acc.add(mapping[h][w], average_color(&center));
            }
        }
        Ok(())
    }
}

fn save_crop(view: &RasterView<'_>, path: &Path) -> Result<(), SampleError> {
    let buf = view.to_buf();
    raster_to_image(&buf)
        .save(path)
        .map_err(|source| SampleError::ImageEncode {
            path: path.to_path_buf(),
            source,
        })
}

/// Convert an owned raster back into an `image` buffer for encoding.
fn raster_to_image(buf: &RasterBuf) -> image::RgbaImage {
    image::RgbaImage::from_raw(buf.width(), buf.height(), buf.data().to_vec())
        .expect("raster buffer length is validated at construction")
}
