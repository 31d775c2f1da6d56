use crate::math::{almost_equal, almost_equal_on_plane, Point3};

/// Result of a positional comparison between two geometries.
///
/// A closed set: positions either coincide within tolerance or they do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryPosition {
    /// The positions coincide within tolerance.
    Overlay,
    /// The positions do not coincide.
    Other,
}

/// Classifies two points after projection onto the reference plane.
///
/// The out-of-plane coordinate is ignored; only x and y are compared.
#[must_use]
pub fn plane_position(p1: &Point3, p2: &Point3, tol: f64) -> GeometryPosition {
    if almost_equal_on_plane(p1, p2, tol) {
        GeometryPosition::Overlay
    } else {
        GeometryPosition::Other
    }
}

/// Classifies two points in full space, comparing all three coordinates.
#[must_use]
pub fn space_position(p1: &Point3, p2: &Point3, tol: f64) -> GeometryPosition {
    if almost_equal(p1, p2, tol) {
        GeometryPosition::Overlay
    } else {
        GeometryPosition::Other
    }
}
