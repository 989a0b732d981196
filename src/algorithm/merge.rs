//! Per-color coalescing of adjacent shapes
//!
//! Shapes are grouped by exact color in first-seen order, sorted by
//! `(y, x)` within each group, and folded left to right. Each shape is only
//! compared with the last shape kept so far; earlier entries are never
//! revisited, so two mergeable shapes separated in sort order stay apart.

use std::collections::HashMap;

use crate::algorithm::shape::Shape;
use crate::spatial::Pixel;

/// Shapes bucketed by color, preserving the order colors first appear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorGroups {
    groups: Vec<(Pixel, Vec<Shape>)>,
    index: HashMap<Pixel, usize>,
}

impl ColorGroups {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape to its color's group
    pub fn push(&mut self, shape: Shape) {
        let slot = *self.index.entry(shape.color).or_insert_with(|| {
            self.groups.push((shape.color, Vec::new()));
            self.groups.len() - 1
        });
        if let Some((_, shapes)) = self.groups.get_mut(slot) {
            shapes.push(shape);
        }
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no shapes have been added
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over `(color, shapes)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Pixel, &[Shape])> {
        self.groups
            .iter()
            .map(|(color, shapes)| (*color, shapes.as_slice()))
    }

    /// Consume the grouping, yielding `(color, shapes)` in first-seen order
    pub fn into_groups(self) -> Vec<(Pixel, Vec<Shape>)> {
        self.groups
    }
}

impl FromIterator<Shape> for ColorGroups {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        let mut groups = Self::new();
        for shape in iter {
            groups.push(shape);
        }
        groups
    }
}

/// Try to absorb `next` into `last`, returning whether it was absorbed
///
/// The horizontal rule only requires matching top rows and touching edges;
/// heights are not compared.
fn absorb(last: &mut Shape, next: &Shape) -> bool {
    if last.y == next.y && last.right() == next.x {
        last.width += next.width;
        true
    } else if last.x == next.x && last.width == next.width && last.bottom() == next.y {
        last.height += next.height;
        true
    } else {
        false
    }
}

/// Fold one color's shapes, already sorted by `(y, x)`
pub fn merge_sorted(sorted: Vec<Shape>) -> Vec<Shape> {
    let mut current_path: Vec<Shape> = Vec::with_capacity(sorted.len());
    for shape in sorted {
        if let Some(last) = current_path.last_mut() {
            if absorb(last, &shape) {
                continue;
            }
        }
        current_path.push(shape);
    }
    current_path
}

/// Merge adjacent same-color shapes
///
/// Output is the concatenation of each color's merged list, colors in the
/// order they first appear in `shapes`.
pub fn merge_shapes(shapes: Vec<Shape>) -> Vec<Shape> {
    shapes
        .into_iter()
        .collect::<ColorGroups>()
        .into_groups()
        .into_iter()
        .flat_map(|(_, mut group)| {
            group.sort_by_key(|s| (s.y, s.x));
            merge_sorted(group)
        })
        .collect()
}
