use thiserror::Error;

/// Top-level error type for the segment relation library.
#[derive(Debug, Error)]
pub enum SegrelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Relation(#[from] RelationError),
}

/// Errors related to geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate segment: {0}")]
    Degenerate(String),
}

/// Errors related to relation queries.
#[derive(Debug, Error)]
pub enum RelationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`SegrelError`].
pub type Result<T> = std::result::Result<T, SegrelError>;
