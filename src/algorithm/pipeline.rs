//! End-to-end conversion from a pixel grid to grouped vector paths

use crate::algorithm::merge::merge_shapes;
use crate::algorithm::paths::{PathGroup, group_paths};
use crate::algorithm::scanner::TilingScanner;
use crate::algorithm::shape::Shape;
use crate::analysis::statistics::ConversionStats;
use crate::spatial::PixelGrid;

/// Runtime switches for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Run the adjacency merge pass after tiling
    pub merge: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self { merge: true }
    }
}

/// Vector rendition of a grid: canvas size plus final shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorImage {
    /// Canvas width, equal to the source width
    pub width: usize,
    /// Canvas height, equal to the source height
    pub height: usize,
    /// Final shapes, grouped by color in first-seen order
    pub shapes: Vec<Shape>,
}

impl VectorImage {
    /// Path elements to emit, one per color
    pub fn path_groups(&self) -> Vec<PathGroup> {
        group_paths(&self.shapes)
    }
}

/// Vector image together with statistics about how it was produced
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The converted image
    pub image: VectorImage,
    /// Counts gathered along the way
    pub stats: ConversionStats,
}

/// Convert a grid with the given options
pub fn convert(grid: &PixelGrid, options: &ConversionOptions) -> Conversion {
    convert_with_progress(grid, options, |_, _| {})
}

/// Convert a grid, calling `on_row(rows_done, total_rows)` after each row
pub fn convert_with_progress<F>(
    grid: &PixelGrid,
    options: &ConversionOptions,
    mut on_row: F,
) -> Conversion
where
    F: FnMut(usize, usize),
{
    let mut scanner = TilingScanner::new(grid);
    while scanner.scan_row() {
        on_row(scanner.next_row(), grid.height());
    }
    let outcome = scanner.finish();

    let scanned = outcome.shapes.len();
    let shapes = if options.merge {
        merge_shapes(outcome.shapes)
    } else {
        outcome.shapes
    };

    let image = VectorImage {
        width: grid.width(),
        height: grid.height(),
        shapes,
    };
    let stats = ConversionStats::new(
        grid.cell_count(),
        outcome.suppressed,
        scanned,
        &outcome.counts,
        &image,
    );

    Conversion { image, stats }
}
