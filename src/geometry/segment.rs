use crate::math::distance_2d::{cross_2d, point_dist, project_onto_segment};
use crate::math::{Point2, Vector2};

/// Which side of a directed segment a point falls on, looking along the
/// direction of travel (start → end).
///
/// Sign convention: with +x right and +y up, a point above an eastbound
/// segment is [`Side::Left`] (positive 2D cross product).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    On,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
            Self::On => write!(f, "On"),
        }
    }
}

/// Closest point on a segment to some query point.
///
/// Invariant: `distance` is the Euclidean distance from the query point to
/// `point`, and `point` lies on the closed segment (`t` in `[0, 1]`).
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// The closest point on the segment.
    pub point: Point2,
    /// The distance from the query point to the closest point.
    pub distance: f64,
    /// The clamped parameter value at the closest point.
    pub t: f64,
}

/// One straight edge of a [`crate::geometry::LineString`], directed start → end.
///
/// Derived on demand from its parent polyline, never stored independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment. Zero-length segments are allowed and treated
    /// as single points by all queries.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector `end - start` (not normalized).
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    /// Returns the segment with start and end swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Projects `p` onto this segment, clamping to the endpoints so the
    /// result always lies within the closed segment.
    ///
    /// A degenerate (zero-length) segment is treated as the single point
    /// `start`. Total for any finite input.
    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Projection {
        let (cx, cy, t) =
            project_onto_segment(p.x, p.y, self.start.x, self.start.y, self.end.x, self.end.y);
        Projection {
            point: Point2::new(cx, cy),
            distance: point_dist(p.x, p.y, cx, cy),
            t,
        }
    }

    /// Classifies which side of this directed segment `p` falls on.
    ///
    /// `epsilon` is relative to segment length: `|cross| <= epsilon * length`
    /// classifies as [`Side::On`]. A degenerate segment has no direction and
    /// classifies every point as [`Side::On`].
    #[must_use]
    pub fn side_of(&self, p: &Point2, epsilon: f64) -> Side {
        let cross = cross_2d(self.start.x, self.start.y, self.end.x, self.end.y, p.x, p.y);
        if cross.abs() <= epsilon * self.length() {
            Side::On
        } else if cross > 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}
