//! RGBA color type and channel-space distance.

/// An RGBA color with 8-bit channels.
///
/// This is the unit of measurement for the whole pipeline: cell-center
/// averages, centroid table entries, and classifier inputs are all `Rgba`
/// values. No color-space conversion is applied anywhere; distances are
/// computed directly on the stored channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0..=255); opaque sources carry 255
    pub a: u8,
}

impl Rgba {
    /// Create a color from individual channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a `[R, G, B, A]` byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Channel values as a `[R, G, B, A]` byte array.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Euclidean distance to another color over all four channels.
    ///
    /// All channels are weighted equally, alpha included. The metric is
    /// symmetric and zero exactly when the colors are identical.
    ///
    /// # Example
    ///
    /// ```
    /// use cell_grid::Rgba;
    ///
    /// let a = Rgba::new(200, 0, 0, 255);
    /// let b = Rgba::new(190, 10, 5, 255);
    /// assert!(a.distance(b) < a.distance(Rgba::new(0, 200, 0, 255)));
    /// ```
    #[inline]
    pub fn distance(self, other: Rgba) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        let da = self.a as f64 - other.a as f64;
        (dr * dr + dg * dg + db * db + da * da).sqrt()
    }
}
