//! Spatial data structures for the source image
//!
//! This module contains:
//! - RGBA pixel values and their SVG color formatting
//! - The immutable pixel grid
//! - The claimed-cell mask tracked during a scan

/// Immutable pixel grid and constructors
pub mod grid;
/// Claimed-cell bit mask
pub mod mask;
/// RGBA pixel value type
pub mod pixel;

pub use grid::PixelGrid;
pub use mask::ClaimedMask;
pub use pixel::Pixel;
