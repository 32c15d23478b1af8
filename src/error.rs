use thiserror::Error;

/// Top-level error type for the geoaxis engine.
#[derive(Debug, Error)]
pub enum GeoaxisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}

/// Errors related to geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid geometry: non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Errors related to the reference alignment.
#[derive(Debug, Error)]
pub enum AlignmentError {
    #[error("alignment has no usable segment (empty, or every polyline has fewer than 2 points)")]
    EmptyAlignment,
}

/// Convenience type alias for results using [`GeoaxisError`].
pub type Result<T> = std::result::Result<T, GeoaxisError>;
