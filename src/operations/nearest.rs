use crate::error::{AlignmentError, GeometryError, Result};
use crate::geometry::{LineString, Segment, Side};
use crate::math::{Point2, SIDE_EPSILON};

/// Result of a nearest-point query against an alignment.
#[derive(Debug, Clone, Copy)]
pub struct NearestPointResult {
    /// The closest point on the alignment.
    pub point: Point2,
    /// The distance from the query point to the closest point.
    pub distance: f64,
    /// The segment that produced the closest point, directed start → end.
    pub segment: Segment,
}

/// Finds the closest point on an alignment to a given query point.
///
/// The alignment is one or more independent polylines; its segments are
/// searched flattened, in input order (polyline order, then segment order
/// within each polyline). When two segments are exactly equidistant from the
/// query point — a point at a shared vertex between two polylines, say — the
/// segment encountered **first** in that order wins, so results are
/// deterministic across runs.
///
/// Side classification is local to the winning segment's direction of
/// travel, not to any whole-polyline orientation.
pub struct NearestOnAlignment<'a> {
    alignment: &'a [LineString],
    side_epsilon: f64,
}

impl<'a> NearestOnAlignment<'a> {
    /// Creates a new query against the given alignment, using the default
    /// [`SIDE_EPSILON`] for on-line classification.
    #[must_use]
    pub fn new(alignment: &'a [LineString]) -> Self {
        Self {
            alignment,
            side_epsilon: SIDE_EPSILON,
        }
    }

    /// Overrides the relative epsilon used by the on-line side test.
    #[must_use]
    pub fn with_side_epsilon(mut self, epsilon: f64) -> Self {
        self.side_epsilon = epsilon;
        self
    }

    /// Executes the query, returning the globally nearest projection across
    /// every segment of every polyline.
    ///
    /// # Errors
    ///
    /// Returns [`AlignmentError::EmptyAlignment`] if no segment exists
    /// (alignment is empty or every polyline has fewer than 2 vertices), and
    /// [`GeometryError::NonFiniteCoordinate`] if the query point or any
    /// alignment vertex is NaN or infinite.
    pub fn execute(&self, point: &Point2) -> Result<NearestPointResult> {
        ensure_finite(point)?;

        let mut best: Option<NearestPointResult> = None;
        for line in self.alignment {
            for segment in line.segments() {
                ensure_finite(&segment.start)?;
                ensure_finite(&segment.end)?;

                let proj = segment.closest_point(point);
                // Strict comparison: on an exact tie the earlier segment wins.
                if best.as_ref().is_none_or(|b| proj.distance < b.distance) {
                    best = Some(NearestPointResult {
                        point: proj.point,
                        distance: proj.distance,
                        segment,
                    });
                }
            }
        }

        best.ok_or_else(|| AlignmentError::EmptyAlignment.into())
    }

    /// Executes the query and classifies which side of the winning segment
    /// the query point falls on.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::execute`].
    pub fn classify(&self, point: &Point2) -> Result<(NearestPointResult, Side)> {
        let nearest = self.execute(point)?;
        let side = nearest.segment.side_of(point, self.side_epsilon);
        Ok((nearest, side))
    }
}

fn ensure_finite(p: &Point2) -> Result<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFiniteCoordinate { x: p.x, y: p.y }.into())
    }
}
