//! In-memory RGBA pixel rectangles.
//!
//! [`RasterBuf`] owns a row-major RGBA byte buffer; [`RasterView`] borrows a
//! rectangular window into one. Cropping a view is a borrow with an adjusted
//! origin and row stride, so slicing a field into cells and cell centers
//! allocates nothing.

use crate::color::Rgba;
use crate::geometry::Rect;

/// An owned row-major RGBA pixel buffer.
///
/// Created by the application crate from a decoded image, and by
/// [`RasterView::to_buf`] when a cropped region needs to outlive its source
/// (a classified [`Cell`](crate::Cell) keeps its cell raster this way).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuf {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RasterBuf {
    /// Wrap a raw RGBA byte buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height * 4`.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize * 4,
            "raster buffer length must be width * height * 4"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA bytes, row-major, 4 bytes per pixel.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// A view over the whole buffer.
    #[inline]
    pub fn view(&self) -> RasterView<'_> {
        RasterView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}

/// A borrowed rectangular window into an RGBA buffer.
///
/// `stride` is the pixel width of the underlying buffer's rows, which may be
/// larger than `width` after a crop.
#[derive(Debug, Clone, Copy)]
pub struct RasterView<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: u32,
}

impl<'a> RasterView<'a> {
    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel at `(x, y)` relative to this view's origin.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.stride as usize + x as usize) * 4;
        Rgba::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Borrow the sub-rectangle `rect` (relative to this view's origin).
    ///
    /// # Panics
    ///
    /// Panics if `rect` does not lie within this view.
    pub fn crop(&self, rect: Rect) -> RasterView<'a> {
        assert!(
            rect.x + rect.width <= self.width && rect.y + rect.height <= self.height,
            "crop rect {:?} outside {}x{} view",
            rect,
            self.width,
            self.height
        );
        if rect.width == 0 || rect.height == 0 {
            return RasterView {
                data: &[],
                width: rect.width,
                height: rect.height,
                stride: self.stride,
            };
        }
        let start = (rect.y as usize * self.stride as usize + rect.x as usize) * 4;
        let last_row = rect.y as usize + rect.height as usize - 1;
        let end = (last_row * self.stride as usize + rect.x as usize + rect.width as usize) * 4;
        RasterView {
            data: &self.data[start..end],
            width: rect.width,
            height: rect.height,
            stride: self.stride,
        }
    }

    /// Copy this view into an owned contiguous buffer.
    pub fn to_buf(&self) -> RasterBuf {
        let mut data = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for y in 0..self.height {
            let row_start = y as usize * self.stride as usize * 4;
            data.extend_from_slice(&self.data[row_start..row_start + self.width as usize * 4]);
        }
        RasterBuf::from_raw(data, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 buffer where pixel (x, y) has r = x, g = y.
    fn coordinate_buf() -> RasterBuf {
        let mut data = Vec::new();
        for y in 0..4u8 {
            for x in 0..4u8 {
                data.extend_from_slice(&[x, y, 0, 255]);
            }
        }
        RasterBuf::from_raw(data, 4, 4)
    }

    #[test]
    #[should_panic(expected = "width * height * 4")]
    fn test_from_raw_rejects_wrong_length() {
        RasterBuf::from_raw(vec![0; 10], 2, 2);
    }

    #[test]
    fn test_pixel_lookup() {
        let buf = coordinate_buf();
        let view = buf.view();
        assert_eq!(view.pixel(0, 0), Rgba::new(0, 0, 0, 255));
        assert_eq!(view.pixel(3, 2), Rgba::new(3, 2, 0, 255));
    }

    #[test]
    fn test_crop_adjusts_origin() {
        let buf = coordinate_buf();
        let cropped = buf.view().crop(Rect::new(1, 2, 2, 2));
        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.height(), 2);
        assert_eq!(cropped.pixel(0, 0), Rgba::new(1, 2, 0, 255));
        assert_eq!(cropped.pixel(1, 1), Rgba::new(2, 3, 0, 255));
    }

    #[test]
    fn test_nested_crop() {
        let buf = coordinate_buf();
        let outer = buf.view().crop(Rect::new(1, 1, 3, 3));
        let inner = outer.crop(Rect::new(1, 1, 1, 1));
        assert_eq!(inner.pixel(0, 0), Rgba::new(2, 2, 0, 255));
    }

    #[test]
    fn test_crop_zero_size() {
        let buf = coordinate_buf();
        let empty = buf.view().crop(Rect::new(2, 2, 0, 0));
        assert_eq!(empty.width(), 0);
        assert_eq!(empty.height(), 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_crop_out_of_bounds_panics() {
        let buf = coordinate_buf();
        buf.view().crop(Rect::new(2, 2, 3, 3));
    }

    #[test]
    fn test_to_buf_copies_window() {
        let buf = coordinate_buf();
        let copied = buf.view().crop(Rect::new(1, 0, 2, 3)).to_buf();
        assert_eq!(copied.width(), 2);
        assert_eq!(copied.height(), 3);
        assert_eq!(copied.view().pixel(0, 0), Rgba::new(1, 0, 0, 255));
        assert_eq!(copied.view().pixel(1, 2), Rgba::new(2, 2, 0, 255));
    }
}
