/// Seed extraction and the rectangle heuristic
pub mod extraction;
/// Per-color adjacency merge pass
pub mod merge;
/// Path data emission and color grouping
pub mod paths;
/// Full conversion pipeline
pub mod pipeline;
/// Horizontal and vertical run measurement
pub mod runs;
/// Row-major tiling sweep
pub mod scanner;
/// Rectangle shape type
pub mod shape;
