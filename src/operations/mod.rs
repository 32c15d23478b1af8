mod batch;
mod nearest;

pub use batch::{ComputeDistances, DistanceResult, SurveyPoint};
pub use nearest::{NearestOnAlignment, NearestPointResult};
