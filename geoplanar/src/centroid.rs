//! Two centroid definitions used at different pipeline stages.
//!
//! [`ring_centroid`] is the area-weighted centroid of a single ring and
//! drives zone selection. [`vertex_mean`] is the plain average of vertices
//! across many rings and drives recentering. The two are intentionally
//! different formulas and must not be swapped: for anything but the simplest
//! shapes they produce different points.

use crate::contour::ClosedContour;
use crate::error::GeoPlanarError;
use crate::point::Point2d;

/// Area-weighted centroid of a single ring, via the shoelace formula.
///
/// The ring is implicitly closed: the last vertex wraps around to the first.
/// Fails with `DegeneratePolygon` when the signed area is zero (collinear
/// vertices or fewer than three of them).
pub fn ring_centroid(ring: &ClosedContour<Point2d>) -> Result<Point2d, GeoPlanarError> {
    let points = &ring.points;
    let mut area2 = 0.0; // doubled signed area
    let mut cx = 0.0;
    let mut cy = 0.0;

    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        let cross = p.x() * q.y() - q.x() * p.y();
        area2 += cross;
        cx += (p.x() + q.x()) * cross;
        cy += (p.y() + q.y()) * cross;
    }

    if area2 == 0.0 {
        return Err(GeoPlanarError::DegeneratePolygon);
    }

    // Cx = 1/(6A) * sum, with A = area2 / 2.
    let factor = 3.0 * area2;
    Ok(Point2d::new(cx / factor, cy / factor))
}

/// Unweighted arithmetic mean of every vertex in the given contours.
///
/// Returns `None` when there are no vertices at all.
pub fn vertex_mean<'a>(
    contours: impl IntoIterator<Item = &'a ClosedContour<Point2d>>,
) -> Option<Point2d> {
    let mut count = 0usize;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;

    for contour in contours {
        for point in contour.iter_points() {
            sum_x += point.x();
            sum_y += point.y();
            count += 1;
        }
    }

    if count == 0 {
        None
    } else {
        Some(Point2d::new(sum_x / count as f64, sum_y / count as f64))
    }
}
