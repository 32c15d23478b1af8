use crate::error::{AlignmentError, Result};
use crate::geometry::{LineString, Side};
use crate::math::{Point2, SIDE_EPSILON};

use super::NearestOnAlignment;

/// One labeled input point, as extracted from a source drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyPoint {
    /// Point label (e.g. a borehole name).
    pub name: String,
    pub point: Point2,
    /// Source drawing layer; carried through to output, never used in
    /// geometric computation.
    pub layer: String,
}

impl SurveyPoint {
    /// Creates a new labeled point.
    #[must_use]
    pub fn new(name: impl Into<String>, point: Point2, layer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            point,
            layer: layer.into(),
        }
    }
}

/// One row of final output: the original point identity plus its computed
/// distance to the alignment and which side it falls on.
///
/// `x`/`y` are the original query coordinates, not the projection. `distance`
/// is full precision; rounding for display belongs to the output writer, as
/// does formatting `side` (via its `Display` impl).
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceResult {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub layer: String,
    pub distance: f64,
    pub side: Side,
}

/// Computes distance and side for a batch of named points against a shared
/// alignment.
///
/// Output order matches input order; callers correlating rows with other
/// per-point data (spreadsheet rows, say) rely on this. The batch is
/// all-or-nothing: an empty alignment or a non-finite coordinate fails the
/// whole call before any row is produced — never a batch of placeholder
/// zero-distance records.
pub struct ComputeDistances<'a> {
    alignment: &'a [LineString],
    side_epsilon: f64,
}

impl<'a> ComputeDistances<'a> {
    /// Creates a new batch query against the given alignment, using the
    /// default [`SIDE_EPSILON`] for on-line classification.
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

    /// Executes the batch, returning one [`DistanceResult`] per input point
    /// in input order.
    ///
    /// # Errors
    ///
    /// Returns [`AlignmentError::EmptyAlignment`] if the alignment has no
    /// usable segment (reported before any point is processed, even for an
    /// empty point set), and [`crate::error::GeometryError`] if any
    /// coordinate is non-finite.
    pub fn execute(&self, points: &[SurveyPoint]) -> Result<Vec<DistanceResult>> {
        if self.alignment.iter().all(|line| line.segment_count() == 0) {
            return Err(AlignmentError::EmptyAlignment.into());
        }

        let query =
            NearestOnAlignment::new(self.alignment).with_side_epsilon(self.side_epsilon);

        let mut results = Vec::with_capacity(points.len());
        for sp in points {
            let (nearest, side) = query.classify(&sp.point)?;
            results.push(DistanceResult {
                name: sp.name.clone(),
                x: sp.point.x,
                y: sp.point.y,
                layer: sp.layer.clone(),
                distance: nearest.distance,
                side,
            });
        }
        Ok(results)
    }
}
