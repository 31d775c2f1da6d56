use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::Result;
use crate::geometry::Segment;
use crate::math::{Point3, Vector3};

/// Checks whether two segments are perpendicular in full space.
///
/// The unsigned angle between the unit directions lies in `[0, π]`;
/// perpendicular means it is within `tol` of `π/2`.
#[must_use]
pub fn is_space_perpendicular(l1: &Segment, l2: &Segment, tol: f64) -> bool {
    (l1.direction().angle(&l2.direction()) - FRAC_PI_2).abs() < tol
}

/// Checks whether two segments are parallel in full space.
///
/// Both co-directional (angle near 0) and opposed (angle near π) count.
#[must_use]
pub fn is_space_parallel(l1: &Segment, l2: &Segment, tol: f64) -> bool {
    let angle = l1.direction().angle(&l2.direction());
    (angle - PI).abs() < tol || angle < tol
}

/// Checks whether two segments are perpendicular when projected onto the
/// reference plane.
///
/// # Errors
///
/// Returns an error if either projection collapses to a point.
pub fn is_plane_perpendicular(l1: &Segment, l2: &Segment, tol: f64) -> Result<bool> {
    Ok(is_space_perpendicular(&l1.to_plane()?, &l2.to_plane()?, tol))
}

/// Checks whether two segments are parallel when projected onto the
/// reference plane.
///
/// Segments that are skew in space but co-directional seen from above are
/// plane-parallel without being space-parallel.
///
/// # Errors
///
/// Returns an error if either projection collapses to a point.
pub fn is_plane_parallel(l1: &Segment, l2: &Segment, tol: f64) -> Result<bool> {
    Ok(is_space_parallel(&l1.to_plane()?, &l2.to_plane()?, tol))
}

/// Computes the intersection of two segments' supporting lines on the
/// reference plane.
///
/// Returns `None` for plane-parallel segments. The result's z is copied from
/// `l1`'s start point. With `touch_only`, the crossing must also lie within
/// the per-axis extent of both segments (within `tol`); an extension crossing
/// outside either extent yields `None`.
///
/// # Errors
///
/// Returns an error if either projection collapses to a point.
pub fn plane_crossing_point(
    l1: &Segment,
    l2: &Segment,
    touch_only: bool,
    tol: f64,
) -> Result<Option<Point3>> {
    let g1 = l1.to_plane()?;
    let g2 = l2.to_plane()?;

    if is_space_parallel(&g1, &g2, tol) {
        return Ok(None);
    }

    let p1 = l1.start();
    let p2 = l1.end();
    let p3 = l2.start();
    let p4 = l2.end();

    // Either segment square to the x axis sends the general solver's
    // determinant toward zero; combine the fixed coordinates instead.
    let x_axis = Vector3::x();
    let f1 = (g1.direction().angle(&x_axis) - FRAC_PI_2).abs() < tol;
    let f2 = (g2.direction().angle(&x_axis) - FRAC_PI_2).abs() < tol;

    let result = if f1 {
        Point3::new(p1.x, p3.y, p1.z)
    } else if f2 {
        Point3::new(p3.x, p1.y, p1.z)
    } else {
        // Both supporting lines in two-point form, solved as a 2x2 system.
        let dx12 = p2.x - p1.x;
        let dx31 = p3.x - p1.x;
        let dx34 = p3.x - p4.x;
        let dy21 = p2.y - p1.y;
        let dy31 = p3.y - p1.y;
        let dy34 = p3.y - p4.y;
        let x = (dx12 * dx34 * dy31 - p3.x * dx12 * dy34 + p1.x * dy21 * dx34)
            / (dy21 * dx34 - dx12 * dy34);
        let y = (dy21 * dy34 * dx31 - p3.y * dy21 * dx34 + p1.y * dx12 * dy34)
            / (dx12 * dy34 - dy21 * dx34);

        // Residual ill-conditioning is a no-intersection outcome, not a fault.
        if !x.is_finite() || !y.is_finite() {
            return Ok(None);
        }
        Point3::new(x, y, p1.z)
    };

    if touch_only
        && !(within_extent(&result, &p1, &p2, tol) && within_extent(&result, &p3, &p4, tol))
    {
        return Ok(None);
    }

    Ok(Some(result))
}

/// Intersects one segment against many, keeping the non-absent crossings in
/// input order.
///
/// # Errors
///
/// Returns an error if any projection collapses to a point.
pub fn plane_crossing_points(
    line: &Segment,
    others: &[Segment],
    touch_only: bool,
    tol: f64,
) -> Result<Vec<Point3>> {
    let mut results = Vec::new();
    for other in others {
        if let Some(pt) = plane_crossing_point(line, other, touch_only, tol)? {
            results.push(pt);
        }
    }
    Ok(results)
}

/// Closed per-axis containment check on x and y, endpoints included
/// within `tol`.
fn within_extent(pt: &Point3, a: &Point3, b: &Point3, tol: f64) -> bool {
    pt.x >= a.x.min(b.x) - tol
        && pt.x <= a.x.max(b.x) + tol
        && pt.y >= a.y.min(b.y) - tol
        && pt.y <= a.y.max(b.y) + tol
}
