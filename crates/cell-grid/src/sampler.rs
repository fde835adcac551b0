//! Representative-color sampling for pixel regions.

use crate::color::Rgba;
use crate::raster::RasterView;

/// Arithmetic-mean color of every pixel in the region, per channel, with
/// integer truncation.
///
/// This is equivalent to a 1x1 box-filter resample of the region, which is
/// the authoritative definition of "average color" for the whole pipeline.
/// Tuned centroid tables are only valid against this exact semantics;
/// replacing it with a gamma-corrected or weighted average would silently
/// invalidate them.
///
/// # Panics
///
/// Panics if the region contains no pixels.
///
/// # Example
///
/// ```
/// use cell_grid::{sampler::average_color, RasterBuf, Rgba};
///
/// // One black and one white pixel average to (127, 127, 127).
/// let buf = RasterBuf::from_raw(vec![0, 0, 0, 255, 255, 255, 255, 255], 2, 1);
/// assert_eq!(average_color(&buf.view()), Rgba::new(127, 127, 127, 255));
/// ```
pub fn average_color(view: &RasterView<'_>) -> Rgba {
    let count = view.width() as u64 * view.height() as u64;
    assert!(count > 0, "cannot average an empty region");

    let mut sums = [0u64; 4];
    for y in 0..view.height() {
        for x in 0..view.width() {
            let [r, g, b, a] = view.pixel(x, y).to_bytes();
            sums[0] += r as u64;
            sums[1] += g as u64;
            sums[2] += b as u64;
            sums[3] += a as u64;
        }
    }

    Rgba::new(
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
        (sums[3] / count) as u8,
    )
}
