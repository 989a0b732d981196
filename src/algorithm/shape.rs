use crate::spatial::Pixel;

/// Axis-aligned rectangle of uniform color
///
/// `(x, y)` is the top-left cell; `width` and `height` are always at least 1.
/// Shapes are created by the scanner and only ever extended by the merge pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Left column
    pub x: usize,
    /// Top row
    pub y: usize,
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Color shared by every covered cell
    pub color: Pixel,
}

impl Shape {
    /// Create a shape
    pub const fn new(x: usize, y: usize, width: usize, height: usize, color: Pixel) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    /// Number of covered cells
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Column one past the right edge
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// Row one past the bottom edge
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Test whether `(x, y)` lies inside the shape
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Iterate over every covered cell as `(x, y)`, row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }
}
