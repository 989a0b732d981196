//! RGBA pixel values with exact equality and SVG color formatting

use std::fmt;

/// A single RGBA color with 8 bits per channel
///
/// Equality is exact component-wise equality, so two pixels that differ in
/// any channel (alpha included) are distinct colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pixel(pub [u8; 4]);

impl Pixel {
    /// Build a pixel from individual channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Build a fully opaque pixel
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, u8::MAX])
    }

    /// Red channel
    pub const fn red(self) -> u8 {
        self.0[0]
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        self.0[2]
    }

    /// Alpha channel
    pub const fn alpha(self) -> u8 {
        self.0[3]
    }

    /// Whether this pixel is dropped from the output
    ///
    /// Fully transparent pixels and pure black pixels (any alpha) are treated
    /// as background. This is a fixed suppression rule, not a transparency
    /// model: a half-transparent black pixel is suppressed too.
    pub const fn is_background(self) -> bool {
        self.alpha() == 0 || (self.red() == 0 && self.green() == 0 && self.blue() == 0)
    }

    /// Lowercase `#rrggbb` fill string, ignoring alpha
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }

    /// Opacity fraction, or `None` when the pixel is fully opaque
    pub fn opacity(self) -> Option<f64> {
        (self.alpha() < u8::MAX).then(|| f64::from(self.alpha()) / f64::from(u8::MAX))
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(channels: [u8; 4]) -> Self {
        Self(channels)
    }
}

impl From<image::Rgba<u8>> for Pixel {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self(pixel.0)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}
