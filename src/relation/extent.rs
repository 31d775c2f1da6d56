use crate::error::{RelationError, Result};
use crate::geometry::Segment;
use crate::math::{almost_equal, Point3};

/// Collects both endpoints of every segment and removes near-duplicates.
///
/// Pairwise tolerance-aware elimination: a later point approximately equal
/// to an earlier survivor is dropped. Relative order is preserved. Exact
/// hash-based dedup would miss endpoints that were computed independently.
#[must_use]
pub fn distinct_points(segments: &[Segment], tol: f64) -> Vec<Point3> {
    let mut points = Vec::with_capacity(segments.len() * 2);
    for seg in segments {
        points.push(seg.start());
        points.push(seg.end());
    }

    let mut removed = vec![false; points.len()];
    for i in 0..points.len() {
        if removed[i] {
            continue;
        }
        for j in (i + 1)..points.len() {
            if !removed[j] && almost_equal(&points[i], &points[j], tol) {
                removed[j] = true;
            }
        }
    }

    points
        .into_iter()
        .zip(removed)
        .filter_map(|(pt, gone)| (!gone).then_some(pt))
        .collect()
}

/// Extracts the vertex sequence of a connected segment chain.
///
/// Emits every segment's start point in order. The final segment's end point
/// is appended only for an open chain; in a closed loop the first entry
/// already implies it. Order-connectivity of the input is the caller's
/// precondition.
///
/// # Errors
///
/// Returns an error if `segments` is empty.
pub fn boundary_points(segments: &[Segment], tol: f64) -> Result<Vec<Point3>> {
    let Some(last) = segments.last() else {
        return Err(RelationError::InvalidInput("empty segment list".into()).into());
    };

    let mut points: Vec<Point3> = segments.iter().map(Segment::start).collect();

    let end = last.end();
    if !almost_equal(&segments[0].start(), &end, tol) {
        points.push(end);
    }

    Ok(points)
}

/// Componentwise minimum over all endpoints of the segments.
///
/// Each axis is minimized independently, so the result is a synthetic corner.
///
/// # Errors
///
/// Returns an error if `segments` is empty.
pub fn min_point(segments: &[Segment]) -> Result<Point3> {
    if segments.is_empty() {
        return Err(RelationError::InvalidInput("empty segment list".into()).into());
    }
    let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    for seg in segments {
        let corner = seg.min_point();
        min = Point3::new(min.x.min(corner.x), min.y.min(corner.y), min.z.min(corner.z));
    }
    Ok(min)
}

/// Componentwise maximum over all endpoints of the segments.
///
/// # Errors
///
/// Returns an error if `segments` is empty.
pub fn max_point(segments: &[Segment]) -> Result<Point3> {
    if segments.is_empty() {
        return Err(RelationError::InvalidInput("empty segment list".into()).into());
    }
    let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for seg in segments {
        let corner = seg.max_point();
        max = Point3::new(max.x.max(corner.x), max.y.max(corner.y), max.z.max(corner.z));
    }
    Ok(max)
}

/// Midpoint of the nearest cross endpoint pair of two segments.
///
/// Of the four start/end pairings, picks the pair at smallest distance and
/// averages it. This is a nearest-approach midpoint, not a centroid of the
/// two segments.
#[must_use]
pub fn nearest_mid_point(l1: &Segment, l2: &Segment) -> Point3 {
    let pairs = [
        (l1.start(), l2.start()),
        (l1.start(), l2.end()),
        (l1.end(), l2.start()),
        (l1.end(), l2.end()),
    ];

    let mut best = pairs[0];
    let mut best_dist = (best.0 - best.1).norm();
    for pair in &pairs[1..] {
        let dist = (pair.0 - pair.1).norm();
        if dist < best_dist {
            best_dist = dist;
            best = *pair;
        }
    }

    Point3::from((best.0.coords + best.1.coords) * 0.5)
}
