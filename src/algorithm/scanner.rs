//! Row-major tiling sweep over a pixel grid
//!
//! Each unclaimed cell becomes a seed. Background seeds are claimed and
//! dropped; every other seed yields exactly one shape via the extraction
//! ladder, and all cells of that shape are claimed before the sweep moves on.
//! The result therefore depends on the order cells are visited, and the
//! sweep is strictly sequential.

use crate::algorithm::extraction::{Extraction, extract_at};
use crate::algorithm::shape::Shape;
use crate::spatial::{ClaimedMask, PixelGrid};

/// Counts of each extraction rule that fired during a scan
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractionCounts {
    /// Rectangles grown from a seed
    pub rectangles: usize,
    /// Vertical run fallbacks
    pub vertical_runs: usize,
    /// Horizontal run fallbacks
    pub horizontal_runs: usize,
    /// Single pixel fallbacks
    pub single_pixels: usize,
}

impl ExtractionCounts {
    fn record(&mut self, extraction: &Extraction) {
        match extraction {
            Extraction::Rectangle(_) => self.rectangles += 1,
            Extraction::VerticalRun(_) => self.vertical_runs += 1,
            Extraction::HorizontalRun(_) => self.horizontal_runs += 1,
            Extraction::SinglePixel(_) => self.single_pixels += 1,
        }
    }

    /// Total number of shapes extracted
    pub const fn total(&self) -> usize {
        self.rectangles + self.vertical_runs + self.horizontal_runs + self.single_pixels
    }
}

/// Single-use scanner that tiles one grid
///
/// Owns the claimed mask for the duration of the conversion. Rows can be
/// processed one at a time with [`TilingScanner::scan_row`] so callers can
/// report progress, or all at once with [`TilingScanner::run`].
pub struct TilingScanner<'a> {
    grid: &'a PixelGrid,
    mask: ClaimedMask,
    shapes: Vec<Shape>,
    next_row: usize,
    suppressed: usize,
    counts: ExtractionCounts,
}

impl<'a> TilingScanner<'a> {
    /// Prepare a scan with every cell unclaimed
    pub fn new(grid: &'a PixelGrid) -> Self {
        Self {
            grid,
            mask: ClaimedMask::new(grid.width(), grid.height()),
            shapes: Vec::new(),
            next_row: 0,
            suppressed: 0,
            counts: ExtractionCounts::default(),
        }
    }

    /// Whether every row has been swept
    pub fn is_finished(&self) -> bool {
        self.next_row >= self.grid.height()
    }

    /// Index of the next row to sweep
    pub const fn next_row(&self) -> usize {
        self.next_row
    }

    /// Sweep the next row
    ///
    /// Returns `false` once there are no rows left.
    pub fn scan_row(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        let y = self.next_row;
        for x in 0..self.grid.width() {
            self.visit(x, y);
        }
        self.next_row += 1;
        true
    }

    /// Sweep all remaining rows and return the shapes in creation order
    pub fn run(mut self) -> ScanOutcome {
        while self.scan_row() {}
        self.finish()
    }

    /// Stop scanning and return what has been collected so far
    pub fn finish(self) -> ScanOutcome {
        ScanOutcome {
            shapes: self.shapes,
            suppressed: self.suppressed,
            counts: self.counts,
            mask: self.mask,
        }
    }

    fn visit(&mut self, x: usize, y: usize) {
        if self.mask.is_claimed(x, y) {
            return;
        }
        let Some(color) = self.grid.get(x, y) else {
            return;
        };

        if color.is_background() {
            self.mask.claim(x, y);
            self.suppressed += 1;
            return;
        }

        if let Some(extraction) = extract_at(self.grid, &self.mask, x, y) {
            let shape = extraction.shape();
            self.mask.claim_rect(shape.x, shape.y, shape.width, shape.height);
            self.counts.record(&extraction);
            self.shapes.push(shape);
        }
    }
}

/// Result of a completed or stopped scan
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Shapes in creation order
    pub shapes: Vec<Shape>,
    /// Number of background cells claimed without a shape
    pub suppressed: usize,
    /// Which extraction rules fired
    pub counts: ExtractionCounts,
    /// Final claimed mask
    pub mask: ClaimedMask,
}

/// Tile a grid in one call
pub fn scan(grid: &PixelGrid) -> ScanOutcome {
    TilingScanner::new(grid).run()
}
