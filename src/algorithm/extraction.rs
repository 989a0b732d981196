//! Shape extraction at a seed cell
//!
//! The scanner asks for one shape per unclaimed, non-background seed. The
//! candidates are tried in priority order: a full rectangle, then a vertical
//! run, then a horizontal run, then the seed cell alone. Every variant is a
//! plain [`Shape`], so the result is a single tagged value.

use crate::algorithm::runs::{horizontal_run, vertical_run};
use crate::algorithm::shape::Shape;
use crate::spatial::{ClaimedMask, Pixel, PixelGrid};

/// Shape produced at a seed, tagged with the rule that produced it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extraction {
    /// Rectangle grown from the seed's horizontal run
    Rectangle(Shape),
    /// `1 x N` column of at least two cells
    VerticalRun(Shape),
    /// `N x 1` row of at least two cells
    HorizontalRun(Shape),
    /// The seed cell on its own
    SinglePixel(Shape),
}

impl Extraction {
    /// The extracted shape regardless of variant
    pub const fn shape(&self) -> Shape {
        match *self {
            Self::Rectangle(shape)
            | Self::VerticalRun(shape)
            | Self::HorizontalRun(shape)
            | Self::SinglePixel(shape) => shape,
        }
    }

    /// Short name of the rule that fired
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::VerticalRun(_) => "vertical run",
            Self::HorizontalRun(_) => "horizontal run",
            Self::SinglePixel(_) => "single pixel",
        }
    }
}

/// Find the rectangle of `color` anchored at `(x, y)`
///
/// Width is fixed to the maximal horizontal run on the seed row. Height then
/// grows one row at a time for as long as the next row matches across that
/// whole width. Narrower but taller rectangles are never considered, so the
/// result is not necessarily the largest rectangle containing the seed; the
/// tiling output depends on this exact tie-break.
///
/// Returns `None` if the seed cell is claimed or does not match `color`.
pub fn find_rectangle(
    grid: &PixelGrid,
    mask: &ClaimedMask,
    x: usize,
    y: usize,
    color: Pixel,
) -> Option<Shape> {
    let rect_width = horizontal_run(grid, mask, x, y, color, grid.width());
    if rect_width == 0 {
        return None;
    }

    let row_end = x + rect_width;
    let max_height = 1 + ((y + 1)..grid.height())
        .take_while(|&row| horizontal_run(grid, mask, x, row, color, row_end) >= rect_width)
        .count();

    Some(Shape::new(x, y, rect_width, max_height, color))
}

/// Extract the shape rooted at `(x, y)` using the fallback ladder
///
/// Returns `None` only when the seed is claimed or outside the grid.
pub fn extract_at(grid: &PixelGrid, mask: &ClaimedMask, x: usize, y: usize) -> Option<Extraction> {
    let color = grid.get(x, y)?;
    if mask.is_claimed(x, y) {
        return None;
    }

    if let Some(rect) = find_rectangle(grid, mask, x, y, color) {
        return Some(Extraction::Rectangle(rect));
    }

    let v_length = vertical_run(grid, mask, x, y, color, grid.height());
    if v_length > 1 {
        return Some(Extraction::VerticalRun(Shape::new(x, y, 1, v_length, color)));
    }

    let h_length = horizontal_run(grid, mask, x, y, color, grid.width());
    if h_length > 1 {
        return Some(Extraction::HorizontalRun(Shape::new(
            x, y, h_length, 1, color,
        )));
    }

    Some(Extraction::SinglePixel(Shape::new(x, y, 1, 1, color)))
}
