//! Polygon container with an outer ring and optional holes.

use serde::{Deserialize, Serialize};

use crate::contour::ClosedContour;
use crate::projection::Projection;

/// Simple polygon with an outer contour and zero or more holes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon<P> {
    /// Outer contour.
    pub outer_contour: ClosedContour<P>,
    /// Inner contours.
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_contour: ClosedContour<P>, inner_contours: Vec<ClosedContour<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }

    /// Iterates over all contours of the polygon, outer first.
    pub fn iter_contours(&self) -> impl Iterator<Item = &ClosedContour<P>> {
        std::iter::once(&self.outer_contour).chain(self.inner_contours.iter())
    }

    /// Casts all points of the polygon into a different point type.
    pub fn cast_points<T>(&self, cast: impl Fn(&P) -> T) -> Polygon<T> {
        Polygon {
            outer_contour: self.outer_contour.cast_points(&cast),
            inner_contours: self
                .inner_contours
                .iter()
                .map(|c| c.cast_points(&cast))
                .collect(),
        }
    }

    /// Projects all the points of the polygon with the given projection,
    /// preserving ring and vertex order.
    pub fn project_points<Proj>(&self, projection: &Proj) -> Option<Polygon<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        Some(Polygon {
            outer_contour: self.outer_contour.project_points(projection)?,
            inner_contours: self
                .inner_contours
                .iter()
                .map(|c| c.project_points(projection))
                .collect::<Option<Vec<_>>>()?,
        })
    }
}

impl<P> From<ClosedContour<P>> for Polygon<P> {
    fn from(value: ClosedContour<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}

impl<P> From<Vec<P>> for Polygon<P> {
    fn from(value: Vec<P>) -> Self {
        Self {
            outer_contour: ClosedContour::new(value),
            inner_contours: vec![],
        }
    }
}
