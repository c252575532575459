//! Closed contour (polygon ring) container.

use serde::{Deserialize, Serialize};

use crate::projection::Projection;

/// A closed sequence of vertices bounding a polygon ring.
///
/// The closing vertex is implicit: the last stored point connects back to the
/// first one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosedContour<P> {
    /// Vertices of the contour, without the closing duplicate.
    pub points: Vec<P>,
}

impl<P> ClosedContour<P> {
    /// Creates a new contour.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }

    /// Number of vertices in the contour.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the contour has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the vertices of the contour.
    pub fn iter_points(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }

    /// Casts all points of the contour into a different point type.
    pub fn cast_points<T>(&self, cast: impl Fn(&P) -> T) -> ClosedContour<T> {
        ClosedContour {
            points: self.points.iter().map(cast).collect(),
        }
    }

    /// Projects all the points of the contour with the given projection.
    pub fn project_points<Proj>(&self, projection: &Proj) -> Option<ClosedContour<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<_>>>()?;
        Some(ClosedContour { points })
    }
}
