use bitvec::prelude::*;
use std::fmt;

/// Bit-per-cell record of which grid cells have been claimed by a shape
///
/// Cells are addressed by `(x, y)` and stored row-major at `y * width + x`.
/// A claimed cell is never released, so the number of claimed cells only
/// grows over the lifetime of a scan.
#[derive(Clone, Debug)]
pub struct ClaimedMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl ClaimedMask {
    /// Create a mask with every cell unclaimed
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Width of the masked grid
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the masked grid
    pub const fn height(&self) -> usize {
        self.height
    }

    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Test whether a cell is claimed
    ///
    /// Cells outside the grid report as claimed so that run scans stop at
    /// the border.
    pub fn is_claimed(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .is_none_or(|i| self.bits.get(i).as_deref() == Some(&true))
    }

    /// Claim a single cell; out-of-range coordinates are ignored
    pub fn claim(&mut self, x: usize, y: usize) {
        if let Some(i) = self.index(x, y) {
            self.bits.set(i, true);
        }
    }

    /// Claim every cell of the `width x height` block anchored at `(x, y)`
    ///
    /// The block is clipped to the grid.
    pub fn claim_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for row in y..y_end {
            let start = row * self.width;
            if let Some(span) = self.bits.get_mut(start + x..start + x_end) {
                span.fill(true);
            }
        }
    }

    /// Number of claimed cells
    pub fn claimed_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test whether every cell has been claimed
    pub fn is_complete(&self) -> bool {
        self.bits.all()
    }
}

impl fmt::Display for ClaimedMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClaimedMask({}x{}, {} claimed)",
            self.width,
            self.height,
            self.claimed_count()
        )
    }
}
