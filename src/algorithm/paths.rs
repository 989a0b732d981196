//! Rectilinear path data for shapes, grouped by fill color

use crate::algorithm::merge::ColorGroups;
use crate::algorithm::shape::Shape;
use crate::spatial::Pixel;

/// Closed clockwise outline of a shape
///
/// Absolute move to the top-left corner, then relative segments right, down
/// and back left before closing: `M x y h w v h h -w z`.
pub fn shape_path(shape: &Shape) -> String {
    format!(
        "M {} {} h {} v {} h -{} z",
        shape.x, shape.y, shape.width, shape.height, shape.width
    )
}

/// All shapes of one color combined into a single path element
#[derive(Debug, Clone, PartialEq)]
pub struct PathGroup {
    /// Shared color
    pub color: Pixel,
    /// Space-separated path data of every member shape
    pub data: String,
    /// Number of shapes in the group
    pub shape_count: usize,
}

impl PathGroup {
    /// `#rrggbb` fill attribute value
    pub fn fill(&self) -> String {
        self.color.hex()
    }

    /// Opacity attribute value, present only for translucent colors
    pub fn opacity(&self) -> Option<f64> {
        self.color.opacity()
    }
}

/// Group shapes by color in first-seen order and join their path data
pub fn group_paths(shapes: &[Shape]) -> Vec<PathGroup> {
    shapes
        .iter()
        .copied()
        .collect::<ColorGroups>()
        .iter()
        .map(|(color, members)| PathGroup {
            color,
            data: members.iter().map(shape_path).collect::<Vec<_>>().join(" "),
            shape_count: members.len(),
        })
        .collect()
}
