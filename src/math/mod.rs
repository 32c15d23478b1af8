pub mod distance_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default threshold for the on-line side classification, relative to
/// segment length: a point whose cross product with the segment direction
/// satisfies `|cross| <= SIDE_EPSILON * length` is classified as on the line.
///
/// Both [`crate::operations::NearestOnAlignment`] and
/// [`crate::operations::ComputeDistances`] accept an override for callers
/// that need a stricter or looser tolerance.
pub const SIDE_EPSILON: f64 = 1e-9;
