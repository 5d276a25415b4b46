use crate::raster::{Point, circle_fill};

/// Cached disk of offsets for the current brush radius.
///
/// Regenerating walks the whole O(r²) disk, so it only happens when the
/// radius actually changes. Placing the brush is a translation of the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrushFootprint {
    radius: i32,
    offsets: Vec<Point>,
}

impl BrushFootprint {
    pub fn new(radius: i32) -> Self {
        Self {
            radius,
            offsets: circle_fill(radius),
        }
    }

    /// Replace the cached offsets with the disk for `radius`.
    pub fn regenerate(&mut self, radius: i32) {
        self.radius = radius;
        self.offsets = circle_fill(radius);
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The cached offsets translated to `center`, in cache order.
    pub fn instantiate(&self, center: Point) -> Vec<Point> {
        let mut placed = Vec::with_capacity(self.offsets.len());
        placed.extend(self.offsets.iter().map(|offset| center.offset(*offset)));
        placed
    }

    /// Offsets on the rim: at least one 4-neighbour falls outside the disk.
    pub fn edge_offsets(&self) -> Vec<Point> {
        self.offsets
            .iter()
            .copied()
            .filter(|p| {
                [(1, 0), (-1, 0), (0, 1), (0, -1)]
                    .into_iter()
                    .any(|(dx, dy)| self.offsets.binary_search(&Point::new(p.x + dx, p.y + dy)).is_err())
            })
            .collect()
    }
}
