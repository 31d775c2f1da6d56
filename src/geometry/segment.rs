use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A bounded line segment between two distinct endpoints.
///
/// Immutable once constructed; transformations return a new segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point3,
    end: Point3,
}

impl Segment {
    /// Creates a new segment from two endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide (zero-length segment).
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        if (end - start).norm() < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "endpoints coincide at ({}, {}, {})",
                start.x, start.y, start.z
            ))
            .into());
        }
        Ok(Self { start, end })
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> Point3 {
        self.start
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> Point3 {
        self.end
    }

    /// Returns the unit direction vector from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        (self.end - self.start).normalize()
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Projects the segment onto the reference plane: both endpoints take the
    /// start point's z, x and y are preserved. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the projection collapses the segment to a point
    /// (the segment runs along the z axis).
    pub fn to_plane(&self) -> Result<Self> {
        Self::new(
            self.start,
            Point3::new(self.end.x, self.end.y, self.start.z),
        )
    }

    /// Returns the componentwise minimum of the two endpoints.
    ///
    /// Each axis is minimized independently; the result is a synthetic corner
    /// that need not equal either endpoint.
    #[must_use]
    pub fn min_point(&self) -> Point3 {
        Point3::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.z.min(self.end.z),
        )
    }

    /// Returns the componentwise maximum of the two endpoints.
    #[must_use]
    pub fn max_point(&self) -> Point3 {
        Point3::new(
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
            self.start.z.max(self.end.z),
        )
    }

    /// Returns the arithmetic midpoint of the two endpoints.
    #[must_use]
    pub fn mid_point(&self) -> Point3 {
        Point3::from((self.start.coords + self.end.coords) * 0.5)
    }
}
