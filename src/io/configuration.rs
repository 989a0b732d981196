//! Output constants and runtime configuration defaults

/// XML namespace written on the root `<svg>` element
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Extension expected on output files
pub const OUTPUT_EXTENSION: &str = "svg";

// Small images finish before a bar is worth drawing
/// Minimum number of rows before a progress bar is shown
pub const PROGRESS_MIN_ROWS: usize = 64;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
/// Redraw the progress bar every this many rows
pub const PROGRESS_ROW_STRIDE: usize = 16;
