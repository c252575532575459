//! Conversions between GeoJSON values and the crate's polygon types.
//!
//! This is the serialization boundary of the crate; nothing here touches the
//! file system.

use geojson::{Feature, FeatureCollection, Geometry, PolygonType, Position, Value};

use crate::contour::ClosedContour;
use crate::error::GeoPlanarError;
use crate::pipeline::ProjectedFeature;
use crate::point::{GeoPoint2d, Point2d};
use crate::polygon::Polygon;

/// Converts a GeoJSON polygon coordinate payload into a [`Polygon`].
///
/// The first ring is the outer contour, the rest are holes. Ring and vertex
/// order are preserved.
pub fn convert_polygon(rings: &PolygonType) -> Result<Polygon<GeoPoint2d>, GeoPlanarError> {
    let mut contours = rings.iter().map(|ring| convert_ring(ring));
    let outer = contours
        .next()
        .ok_or_else(|| GeoPlanarError::MalformedGeometry("polygon without rings".into()))??;
    let inner = contours.collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(outer, inner))
}

fn convert_ring(ring: &[Position]) -> Result<ClosedContour<GeoPoint2d>, GeoPlanarError> {
    let mut points = ring
        .iter()
        .map(convert_position)
        .collect::<Result<Vec<_>, _>>()?;
    if points.is_empty() {
        return Err(GeoPlanarError::MalformedGeometry("empty ring".into()));
    }
    // GeoJSON rings repeat the first vertex at the end; the contour keeps the
    // closing edge implicit.
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    Ok(ClosedContour::new(points))
}

fn convert_position(position: &Position) -> Result<GeoPoint2d, GeoPlanarError> {
    match position[..] {
        [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Ok(GeoPoint2d::lonlat(lon, lat)),
        [_, _, ..] => Err(GeoPlanarError::MalformedGeometry(
            "non-finite coordinate".into(),
        )),
        _ => Err(GeoPlanarError::MalformedGeometry(
            "position must contain at least two numbers".into(),
        )),
    }
}

/// Converts a planar polygon back into a GeoJSON coordinate payload,
/// restoring the closing vertex of each ring.
pub fn polygon_to_value(polygon: &Polygon<Point2d>) -> Value {
    Value::Polygon(polygon.iter_contours().map(ring_to_positions).collect())
}

fn ring_to_positions(ring: &ClosedContour<Point2d>) -> Vec<Position> {
    let mut positions: Vec<Position> = ring.iter_points().map(|p| vec![p.x(), p.y()]).collect();
    if let Some(first) = positions.first().cloned() {
        positions.push(first);
    }
    positions
}

impl ProjectedFeature {
    /// Converts the projected feature into a GeoJSON feature.
    pub fn to_feature(&self) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(polygon_to_value(&self.geometry))),
            id: None,
            properties: self.properties.clone(),
            foreign_members: None,
        }
    }
}

/// Assembles projected features into a GeoJSON feature collection.
pub fn to_feature_collection(features: &[ProjectedFeature]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: features.iter().map(ProjectedFeature::to_feature).collect(),
        foreign_members: None,
    }
}
