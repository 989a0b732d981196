//! Conversion statistics for reporting output compactness

use std::fmt;

use crate::algorithm::pipeline::VectorImage;
use crate::algorithm::scanner::ExtractionCounts;

/// Summary of one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    /// Cells in the source grid
    pub cells: usize,
    /// Background cells dropped without a shape
    pub suppressed_cells: usize,
    /// Shapes produced by the tiling scan
    pub scanned_shapes: usize,
    /// Shapes left after the merge pass
    pub merged_shapes: usize,
    /// Distinct colors emitted, one path element each
    pub colors: usize,
    /// Which extraction rules produced the scanned shapes
    pub extractions: ExtractionCounts,
}

impl ConversionStats {
    /// Gather statistics from the stages of a conversion
    pub fn new(
        cells: usize,
        suppressed_cells: usize,
        scanned_shapes: usize,
        extractions: &ExtractionCounts,
        image: &VectorImage,
    ) -> Self {
        let mut colors: Vec<_> = image.shapes.iter().map(|s| s.color).collect();
        colors.sort_unstable();
        colors.dedup();

        Self {
            cells,
            suppressed_cells,
            scanned_shapes,
            merged_shapes: image.shapes.len(),
            colors: colors.len(),
            extractions: *extractions,
        }
    }

    /// Cells covered by emitted shapes
    pub const fn covered_cells(&self) -> usize {
        self.cells - self.suppressed_cells
    }

    /// Fraction of scanned shapes removed by merging, in `[0, 1]`
    pub fn merge_reduction(&self) -> f64 {
        if self.scanned_shapes == 0 {
            return 0.0;
        }
        let removed = self.scanned_shapes - self.merged_shapes;
        removed as f64 / self.scanned_shapes as f64
    }

    /// Average number of cells per emitted shape
    pub fn cells_per_shape(&self) -> f64 {
        if self.merged_shapes == 0 {
            return 0.0;
        }
        self.covered_cells() as f64 / self.merged_shapes as f64
    }
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells ({} suppressed), {} shapes scanned, {} after merge ({:.1}% fewer), {} colors, {:.2} cells/shape",
            self.cells,
            self.suppressed_cells,
            self.scanned_shapes,
            self.merged_shapes,
            self.merge_reduction() * 100.0,
            self.colors,
            self.cells_per_shape()
        )
    }
}
