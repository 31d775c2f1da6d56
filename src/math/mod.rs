/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Geometric tolerance below which a segment counts as degenerate.
pub const TOLERANCE: f64 = 1e-10;

/// Default comparison tolerance for relation queries, in source units.
pub const DEFAULT_TOLERANCE: f64 = 0.02;

/// Approximate point equality: per-axis absolute difference under `tol`.
///
/// Not the same as `==`; adjacent endpoints computed independently rarely
/// compare bit-equal.
#[must_use]
pub fn almost_equal(a: &Point3, b: &Point3, tol: f64) -> bool {
    (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol && (a.z - b.z).abs() < tol
}

/// Approximate point equality on the reference plane: compares x and y only.
#[must_use]
pub fn almost_equal_on_plane(a: &Point3, b: &Point3, tol: f64) -> bool {
    (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn almost_equal_within_tolerance() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.005, 1.995, 3.0);
        assert!(almost_equal(&a, &b, DEFAULT_TOLERANCE));
        assert!(!almost_equal(&a, &b, 1e-4));
    }

    #[test]
    fn almost_equal_is_symmetric() {
        let a = Point3::new(0.3, -0.7, 2.1);
        let b = Point3::new(0.31, -0.69, 2.11);
        assert_eq!(
            almost_equal(&a, &b, DEFAULT_TOLERANCE),
            almost_equal(&b, &a, DEFAULT_TOLERANCE)
        );
    }

    #[test]
    fn plane_comparison_ignores_z() {
        let a = Point3::new(1.0, 2.0, 0.0);
        let b = Point3::new(1.0, 2.0, 100.0);
        assert!(almost_equal_on_plane(&a, &b, DEFAULT_TOLERANCE));
        assert!(!almost_equal(&a, &b, DEFAULT_TOLERANCE));
    }
}
