//! Maximal runs of identical unclaimed color from a start cell

use crate::spatial::{ClaimedMask, Pixel, PixelGrid};

// A cell continues a run when it is unclaimed and exactly matches the color
fn extends_run(grid: &PixelGrid, mask: &ClaimedMask, x: usize, y: usize, color: Pixel) -> bool {
    !mask.is_claimed(x, y) && grid.get(x, y) == Some(color)
}

/// Length of the run starting at `(x, y)` and extending in `+x`
///
/// Scanning stops at column `limit` (exclusive), at the first claimed cell,
/// or at the first cell whose color differs from `color`. Returns 0 when the
/// start cell itself fails.
pub fn horizontal_run(
    grid: &PixelGrid,
    mask: &ClaimedMask,
    x: usize,
    y: usize,
    color: Pixel,
    limit: usize,
) -> usize {
    (x..limit)
        .take_while(|&cx| extends_run(grid, mask, cx, y, color))
        .count()
}

/// Length of the run starting at `(x, y)` and extending in `+y`
///
/// Symmetric to [`horizontal_run`] with `limit` bounding the row index.
pub fn vertical_run(
    grid: &PixelGrid,
    mask: &ClaimedMask,
    x: usize,
    y: usize,
    color: Pixel,
    limit: usize,
) -> usize {
    (y..limit)
        .take_while(|&cy| extends_run(grid, mask, x, cy, color))
        .count()
}
