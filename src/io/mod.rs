//! Input/output: decoding, SVG export, command line and error handling

/// Command-line parsing and the file conversion driver
pub mod cli;
/// Output constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Source image decoding
pub mod image;
/// Scan progress display
pub mod progress;
/// SVG document rendering and writing
pub mod svg;
