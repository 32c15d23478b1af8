use crate::math::Point2;

use super::Segment;

/// An open polyline with straight-line segments between consecutive vertices.
///
/// A polyline with fewer than 2 vertices has no segments; that is degenerate
/// input, not an error. An alignment is a slice of independent `LineString`s
/// sharing a semantic role, never merged into one connected path (merging
/// disjoint lines would fabricate segments between their endpoints).
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    pub points: Vec<Point2>,
}

impl LineString {
    /// Creates a polyline from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates a polyline from raw coordinate pairs.
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self {
            points: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    /// Returns a lazy iterator over the consecutive-vertex segments.
    ///
    /// Empty for polylines with fewer than 2 vertices.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the total length of the polyline.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }
}
