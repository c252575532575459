//! Reversible offset localization of GeoJSON feature collections.
//!
//! Translating every vertex of a collection by a fixed offset strips the
//! absolute geographic position from the data while preserving shape. The
//! offset used by [`localize`] must be kept by the caller: applying the same
//! offset to [`restore`] reproduces the original coordinates.

use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde::{Deserialize, Serialize};

use crate::coords::CoordinateArray;
use crate::error::GeoPlanarError;
use crate::point::Point2d;

/// The translation applied to every vertex of a localized collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OffsetVector {
    /// Offset along the x (longitude) axis.
    pub x: f64,
    /// Offset along the y (latitude) axis.
    pub y: f64,
}

impl OffsetVector {
    /// Creates a new offset vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point2d> for OffsetVector {
    fn from(point: Point2d) -> Self {
        Self::new(point.x(), point.y())
    }
}

/// Returns the first vertex of the first polygonal feature of the collection.
///
/// Features with other geometry types (or without geometry) are skipped.
pub fn reference_point(collection: &FeatureCollection) -> Result<Point2d, GeoPlanarError> {
    for feature in &collection.features {
        let Some(geometry) = &feature.geometry else {
            continue;
        };
        let position = match &geometry.value {
            Value::Polygon(rings) => rings.first().and_then(|ring| ring.first()),
            Value::MultiPolygon(polygons) => polygons
                .first()
                .and_then(|polygon| polygon.first())
                .and_then(|ring| ring.first()),
            _ => continue,
        };
        let Some(position) = position else {
            return Err(GeoPlanarError::MalformedGeometry(
                "empty coordinate sequence".into(),
            ));
        };
        return match position[..] {
            [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Point2d::new(x, y)),
            [_, _, ..] => Err(GeoPlanarError::MalformedGeometry(
                "non-finite coordinate".into(),
            )),
            _ => Err(GeoPlanarError::MalformedGeometry(
                "position must contain at least two numbers".into(),
            )),
        };
    }
    Err(GeoPlanarError::NoEligibleFeature)
}

/// Subtracts `offset` from every coordinate of every feature.
///
/// The same global offset is applied to the whole collection, regardless of
/// the geometry type of individual features. Returns a new collection; the
/// input is left untouched.
pub fn localize(
    collection: &FeatureCollection,
    offset: OffsetVector,
) -> Result<FeatureCollection, GeoPlanarError> {
    translate(collection, -offset.x, -offset.y)
}

/// Adds `offset` back to every coordinate of every feature, undoing a
/// previous [`localize`] call made with the same offset.
pub fn restore(
    collection: &FeatureCollection,
    offset: OffsetVector,
) -> Result<FeatureCollection, GeoPlanarError> {
    translate(collection, offset.x, offset.y)
}

/// Localizes a collection by its own reference point, returning the offset
/// needed to restore it later.
pub fn localize_with_reference(
    collection: &FeatureCollection,
) -> Result<(FeatureCollection, OffsetVector), GeoPlanarError> {
    let offset = OffsetVector::from(reference_point(collection)?);
    Ok((localize(collection, offset)?, offset))
}

fn translate(
    collection: &FeatureCollection,
    dx: f64,
    dy: f64,
) -> Result<FeatureCollection, GeoPlanarError> {
    let features = collection
        .features
        .iter()
        .map(|feature| translate_feature(feature, dx, dy))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FeatureCollection {
        bbox: collection.bbox.clone(),
        features,
        foreign_members: collection.foreign_members.clone(),
    })
}

fn translate_feature(feature: &Feature, dx: f64, dy: f64) -> Result<Feature, GeoPlanarError> {
    let geometry = feature
        .geometry
        .as_ref()
        .map(|geometry| translate_geometry(geometry, dx, dy))
        .transpose()?;
    Ok(Feature {
        bbox: feature.bbox.clone(),
        geometry,
        id: feature.id.clone(),
        properties: feature.properties.clone(),
        foreign_members: feature.foreign_members.clone(),
    })
}

fn translate_geometry(geometry: &Geometry, dx: f64, dy: f64) -> Result<Geometry, GeoPlanarError> {
    let coords = CoordinateArray::from_value(&geometry.value)?;
    let value = coords.map(&|p| p.translate(dx, dy)).to_value(&geometry.value)?;
    Ok(Geometry {
        bbox: geometry.bbox.clone(),
        value,
        foreign_members: geometry.foreign_members.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geojson::JsonObject;

    fn feature(value: Value) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(value)),
            id: None,
            properties: None,
            foreign_members: None,
        }
    }

    fn collection(features: Vec<Feature>) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    fn polygon_value() -> Value {
        Value::Polygon(vec![vec![
            vec![30.0, 10.5],
            vec![31.0, 10.5],
            vec![31.0, 11.5],
            vec![30.0, 10.5],
        ]])
    }

    fn multi_polygon_value() -> Value {
        Value::MultiPolygon(vec![vec![vec![
            vec![-3.5, 40.0],
            vec![-3.0, 40.0],
            vec![-3.0, 40.5],
            vec![-3.5, 40.0],
        ]]])
    }

    fn leaves(value: &Value) -> Vec<f64> {
        match value {
            Value::Point(p) => p.clone(),
            Value::MultiPoint(ps) | Value::LineString(ps) => {
                ps.iter().flatten().copied().collect()
            }
            Value::MultiLineString(ls) | Value::Polygon(ls) => {
                ls.iter().flatten().flatten().copied().collect()
            }
            Value::MultiPolygon(mp) => mp.iter().flatten().flatten().flatten().copied().collect(),
            Value::GeometryCollection(_) => vec![],
        }
    }

    #[test]
    fn reference_point_prefers_first_polygonal_feature() {
        let collection = collection(vec![
            feature(Value::Point(vec![99.0, 99.0])),
            feature(multi_polygon_value()),
            feature(polygon_value()),
        ]);
        assert_eq!(
            reference_point(&collection).unwrap(),
            Point2d::new(-3.5, 40.0)
        );
    }

    #[test]
    fn reference_point_rejects_non_finite_vertex() {
        let bad = Value::Polygon(vec![vec![
            vec![f64::NAN, f64::NAN],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![f64::NAN, f64::NAN],
        ]]);
        let collection = collection(vec![feature(bad)]);
        assert_matches!(
            reference_point(&collection),
            Err(GeoPlanarError::MalformedGeometry(_))
        );
    }

    #[test]
    fn reference_point_fails_without_polygons() {
        let collection = collection(vec![feature(Value::Point(vec![1.0, 2.0]))]);
        assert_matches!(
            reference_point(&collection),
            Err(GeoPlanarError::NoEligibleFeature)
        );
    }

    #[test]
    fn round_trip_restores_coordinates() {
        let original = collection(vec![
            feature(polygon_value()),
            feature(multi_polygon_value()),
            feature(Value::Point(vec![5.25, -7.75])),
        ]);

        let (localized, offset) = localize_with_reference(&original).unwrap();
        assert_eq!(offset, OffsetVector::new(30.0, 10.5));

        let restored = restore(&localized, offset).unwrap();
        for (before, after) in original.features.iter().zip(&restored.features) {
            let before = leaves(&before.geometry.as_ref().unwrap().value);
            let after = leaves(&after.geometry.as_ref().unwrap().value);
            assert_eq!(before.len(), after.len());
            for (b, a) in before.iter().zip(&after) {
                assert_abs_diff_eq!(*b, *a, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn localize_translates_non_polygon_features_too() {
        let input = collection(vec![
            feature(polygon_value()),
            feature(Value::Point(vec![10.0, 20.0])),
        ]);
        let localized = localize(&input, OffsetVector::new(10.0, 20.0)).unwrap();
        assert_eq!(
            localized.features[1].geometry.as_ref().unwrap().value,
            Value::Point(vec![0.0, 0.0])
        );
    }

    #[test]
    fn localize_preserves_properties_and_order() {
        let mut properties = JsonObject::new();
        properties.insert("name".into(), "plot 7".into());
        let mut tagged = feature(polygon_value());
        tagged.properties = Some(properties.clone());

        let input = collection(vec![tagged, feature(multi_polygon_value())]);
        let localized = localize(&input, OffsetVector::new(1.0, 1.0)).unwrap();

        assert_eq!(localized.features.len(), 2);
        assert_eq!(localized.features[0].properties, Some(properties));
        assert_matches!(
            localized.features[1].geometry.as_ref().unwrap().value,
            Value::MultiPolygon(_)
        );
    }

    #[test]
    fn malformed_ring_fails_whole_collection() {
        let bad = feature(Value::Polygon(vec![vec![vec![0.0, 0.0], vec![1.0]]]));
        let input = collection(vec![feature(polygon_value()), bad]);
        assert_matches!(
            localize(&input, OffsetVector::new(1.0, 1.0)),
            Err(GeoPlanarError::MalformedGeometry(_))
        );
    }

    #[test]
    fn feature_without_geometry_passes_through() {
        let empty = Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: None,
            foreign_members: None,
        };
        let input = collection(vec![empty]);
        let localized = localize(&input, OffsetVector::new(1.0, 1.0)).unwrap();
        assert!(localized.features[0].geometry.is_none());
    }
}
