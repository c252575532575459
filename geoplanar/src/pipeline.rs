//! Projection of polygon collections onto a local Euclidean plane.

use geojson::{FeatureCollection, JsonObject, Value};
use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use crate::centroid::vertex_mean;
use crate::error::GeoPlanarError;
use crate::geojson::convert_polygon;
use crate::point::{GeoPoint2d, Point2d};
use crate::polygon::Polygon;
use crate::projection::Projection;
use crate::zone::{select_zone, UtmZone};

/// Rotation and scaling applied after projected polygons are recentered.
///
/// Both operate about the origin. The default is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineParams {
    /// Rotation in degrees, counterclockwise for positive values.
    pub rotate_deg: f64,
    /// Uniform scale factor.
    pub scale_factor: f64,
}

impl Default for AffineParams {
    fn default() -> Self {
        Self {
            rotate_deg: 0.0,
            scale_factor: 1.0,
        }
    }
}

/// A projected polygon together with the properties of its source feature.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedFeature {
    /// Geometry in the local planar frame, in meters.
    pub geometry: Polygon<Point2d>,
    /// Properties copied from the source feature.
    pub properties: Option<JsonObject>,
}

/// Projects the Polygon features of a collection into a local Euclidean
/// frame.
///
/// The stage order is fixed: filter Polygon features, select the planar zone
/// from their average centroid longitude, forward-project every vertex,
/// recenter on the vertex mean, then rotate and scale. Rotation and scaling
/// act about the origin, so they behave as "about the collection center"
/// only because recentering runs first.
///
/// MultiPolygon features are handled by the offset localizer but are
/// excluded here, from both zone selection and the projected output.
#[derive(Debug, Clone, Default)]
pub struct EuclideanProjector {
    affine: AffineParams,
}

impl EuclideanProjector {
    /// Creates a projector with the given affine parameters.
    pub fn new(affine: AffineParams) -> Self {
        Self { affine }
    }

    /// Projects the collection, building the geodetic transform for the
    /// selected zone with `make_projection`.
    ///
    /// Any stage failure aborts the whole run; there is no partial output.
    pub fn project_with<Proj>(
        &self,
        collection: &FeatureCollection,
        make_projection: impl FnOnce(UtmZone) -> Result<Proj, GeoPlanarError>,
    ) -> Result<Vec<ProjectedFeature>, GeoPlanarError>
    where
        Proj: Projection<InPoint = GeoPoint2d, OutPoint = Point2d>,
    {
        let source = polygon_features(collection)?;

        let zone = select_zone(source.iter().map(|(polygon, _)| polygon))?;
        log::debug!("selected planar zone {}", zone.number());
        let projection = make_projection(zone)?;

        let mut projected = Vec::with_capacity(source.len());
        for (polygon, properties) in source {
            let geometry = polygon.project_points(&projection).ok_or_else(|| {
                GeoPlanarError::Projection("provider returned no result for a vertex".into())
            })?;
            projected.push(ProjectedFeature {
                geometry,
                properties,
            });
        }

        let center = vertex_mean(projected.iter().map(|f| &f.geometry.outer_contour))
            .ok_or(GeoPlanarError::NoPolygonFeatures)?;
        log::debug!("recentering by ({}, {})", -center.x(), -center.y());
        for feature in &mut projected {
            feature.geometry = feature
                .geometry
                .cast_points(|p| p.translate(-center.x(), -center.y()));
        }

        if self.affine.rotate_deg != 0.0 {
            let rotation = Rotation2::new(self.affine.rotate_deg.to_radians());
            for feature in &mut projected {
                feature.geometry = feature.geometry.cast_points(|p| {
                    let rotated = rotation * Vector2::new(p.x(), p.y());
                    Point2d::new(rotated.x, rotated.y)
                });
            }
        }

        if self.affine.scale_factor != 1.0 {
            let factor = self.affine.scale_factor;
            for feature in &mut projected {
                feature.geometry = feature
                    .geometry
                    .cast_points(|p| Point2d::new(p.x() * factor, p.y() * factor));
            }
        }

        Ok(projected)
    }

    /// Projects the collection through the bundled UTM transform.
    #[cfg(feature = "geodesy")]
    pub fn project_utm(
        &self,
        collection: &FeatureCollection,
    ) -> Result<Vec<ProjectedFeature>, GeoPlanarError> {
        self.project_with(collection, crate::projection::UtmProjection::new)
    }
}

type SourceFeature = (Polygon<GeoPoint2d>, Option<JsonObject>);

fn polygon_features(collection: &FeatureCollection) -> Result<Vec<SourceFeature>, GeoPlanarError> {
    let mut features = Vec::new();
    for feature in &collection.features {
        let Some(geometry) = &feature.geometry else {
            continue;
        };
        if let Value::Polygon(rings) = &geometry.value {
            features.push((convert_polygon(rings)?, feature.properties.clone()));
        }
    }
    Ok(features)
}
