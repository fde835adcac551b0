//! Filesystem access for tuning/test samples.
//!
//! A sample is a directory named `field_*`, nested anywhere under a root
//! folder, containing `image.PNG` (the field screenshot) and `mapping.txt`
//! (the labeled grid).

use std::path::{Path, PathBuf};

use cell_grid::{CellType, RasterBuf};

use crate::error::SampleError;

/// Screenshot file name inside a sample directory.
pub const IMAGE_FILE: &str = "image.PNG";

/// Mapping file name inside a sample directory.
pub const MAPPING_FILE: &str = "mapping.txt";

/// Directory-name prefix identifying a sample.
const SAMPLE_PREFIX: &str = "field_";

/// Recursively collect every `field_*` directory under `root`, sorted by
/// path for a deterministic processing order.
///
/// A missing or unreadable root propagates as [`SampleError::Io`] with the
/// offending path.
pub fn find_sample_dirs(root: &Path) -> Result<Vec<PathBuf>, SampleError> {
    let mut dirs = Vec::new();
    walk(root, &mut dirs)?;
    dirs.sort();
    Ok(dirs)
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), SampleError> {
    let entries = std::fs::read_dir(dir).map_err(|source| SampleError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| SampleError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let is_sample = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(SAMPLE_PREFIX));
        if is_sample {
            out.push(path);
        } else {
            walk(&path, out)?;
        }
    }
    Ok(())
}

/// Decode a sample directory's `image.PNG` into an RGBA raster.
///
/// Images without an alpha channel are accepted; their pixels decode with
/// alpha 255.
pub fn load_image(sample_dir: &Path) -> Result<RasterBuf, SampleError> {
    let path = sample_dir.join(IMAGE_FILE);
    let image = image::open(&path)
        .map_err(|source| match source {
            image::ImageError::IoError(source) => SampleError::Io {
                path: path.clone(),
                source,
            },
            source => SampleError::ImageDecode {
                path: path.clone(),
                source,
            },
        })?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Ok(RasterBuf::from_raw(image.into_raw(), width, height))
}

/// Read and parse a sample directory's `mapping.txt`.
pub fn load_mapping(sample_dir: &Path) -> Result<Vec<Vec<CellType>>, SampleError> {
    let path = sample_dir.join(MAPPING_FILE);
    let text = std::fs::read_to_string(&path).map_err(|source| SampleError::Io {
        path: path.clone(),
        source,
    })?;
    cell_grid::parse_mapping(&text).map_err(|source| SampleError::Mapping { path, source })
}
