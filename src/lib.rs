//! Greedy rectangle tiling of raster pixel art into compact SVG paths
//!
//! A single row-major sweep claims maximal same-color rectangles, adjacent
//! rectangles of one color are merged, and each color becomes one `<path>`
//! built from rectilinear outlines. Pure black and fully transparent pixels
//! are treated as background and never emitted.

#![forbid(unsafe_code)]

/// Tiling scan, merge pass and path emission
pub mod algorithm;
/// Statistics about conversion results
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Pixel grid and claimed-cell tracking
pub mod spatial;

pub use algorithm::pipeline::{ConversionOptions, VectorImage, convert};
pub use io::error::{ConversionError, Result};
