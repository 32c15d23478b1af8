pub mod linestring;
pub mod segment;

pub use linestring::LineString;
pub use segment::{Projection, Segment, Side};
