//! Immutable pixel grid decoded from a source image
//!
//! Coordinates follow image conventions: origin at the top-left, `x` grows
//! rightward and `y` grows downward. Internally the data lives in an
//! `ndarray` matrix indexed `[y, x]`.

use ndarray::Array2;

use crate::io::error::{Result, malformed_grid};
use crate::spatial::pixel::Pixel;

/// Read-only `height x width` view over RGBA pixel data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array2<Pixel>,
}

impl PixelGrid {
    /// Build a grid from row vectors
    ///
    /// # Errors
    ///
    /// Returns `MalformedGrid` if the rows do not all have the same length
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(malformed_grid(&format!(
                "row {row} has {} pixels, expected {width} (from row 0)",
                bad.len()
            )));
        }

        let flat: Vec<Pixel> = rows.into_iter().flatten().collect();
        Self::from_flat(width, height, flat)
    }

    /// Build a grid from a packed RGBA8 byte buffer in row-major order
    ///
    /// # Errors
    ///
    /// Returns `MalformedGrid` if the buffer length is not `width * height * 4`
    pub fn from_raw(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|cells| cells.checked_mul(4))
            .ok_or_else(|| malformed_grid(&format!("dimensions {width}x{height} overflow")))?;

        if bytes.len() != expected {
            return Err(malformed_grid(&format!(
                "buffer holds {} bytes, expected {expected} for {width}x{height} RGBA",
                bytes.len()
            )));
        }

        let flat = bytes
            .chunks_exact(4)
            .map(|chunk| {
                let mut channels = [0u8; 4];
                channels.copy_from_slice(chunk);
                Pixel(channels)
            })
            .collect();
        Self::from_flat(width, height, flat)
    }

    /// Build a grid from a decoded RGBA8 image
    pub fn from_rgba_image(image: &image::RgbaImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let pixels = Array2::from_shape_fn((height, width), |(y, x)| {
            Pixel::from(*image.get_pixel(x as u32, y as u32))
        });
        Self { pixels }
    }

    fn from_flat(width: usize, height: usize, flat: Vec<Pixel>) -> Result<Self> {
        let pixels =
            Array2::from_shape_vec((height, width), flat).map_err(|e| malformed_grid(&e))?;
        Ok(Self { pixels })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Color at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.pixels.get([y, x]).copied()
    }

    /// Iterate over all cells in scan order as `(x, y, pixel)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Pixel)> + '_ {
        self.pixels
            .indexed_iter()
            .map(|((y, x), &pixel)| (x, y, pixel))
    }
}
