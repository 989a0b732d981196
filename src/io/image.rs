//! Source image decoding into a pixel grid

use std::path::Path;

use crate::io::error::{ConversionError, Result};
use crate::spatial::PixelGrid;

/// Decode an image file and normalize it to an RGBA pixel grid
///
/// Any format the `image` crate can decode is accepted. Images without an
/// alpha channel are expanded with full opacity, and other bit depths are
/// converted to 8 bits per channel.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| ConversionError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(PixelGrid::from_rgba_image(&img.to_rgba8()))
}

/// Decode an in-memory encoded image into a pixel grid
///
/// # Errors
///
/// Returns `ImageLoad` if the bytes are not a decodable image
pub fn decode_grid(bytes: &[u8]) -> Result<PixelGrid> {
    let img = image::load_from_memory(bytes)?;
    Ok(PixelGrid::from_rgba_image(&img.to_rgba8()))
}
