//! Planar zone selection from average polygon longitude.

use serde::{Deserialize, Serialize};

use crate::centroid::ring_centroid;
use crate::error::GeoPlanarError;
use crate::point::{GeoPoint2d, Point2d};
use crate::polygon::Polygon;

/// A UTM longitudinal zone number.
///
/// Zones are 6 degrees of longitude wide, numbered 1 through 60 eastward
/// from 180°W. The coordinate system derived from the zone is always
/// north-oriented; hemisphere is not tracked, so southern-hemisphere input
/// projects with negative northings instead of the conventional 10,000 km
/// false northing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtmZone(u8);

impl UtmZone {
    /// Derives the zone containing the given longitude (degrees).
    ///
    /// Fails with `InvalidZone` when the longitude is NaN or outside
    /// [-180, 180]; the derived number is clamped to [1, 60] (longitude of
    /// exactly 180 would otherwise land in zone 61).
    pub fn from_longitude(lon: f64) -> Result<Self, GeoPlanarError> {
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(GeoPlanarError::InvalidZone(lon));
        }
        let number = ((lon + 180.0) / 6.0).floor() as i64 + 1;
        Ok(Self(number.clamp(1, 60) as u8))
    }

    /// The zone number, in [1, 60].
    pub fn number(&self) -> u8 {
        self.0
    }

    /// The `geodesy` operator definition string for this zone.
    pub fn definition(&self) -> String {
        format!("utm zone={}", self.0)
    }
}

/// Selects the planar zone for a set of polygons.
///
/// Computes the area-weighted centroid of each polygon's outer ring, averages
/// the centroid longitudes, and derives the zone from the average. The result
/// does not depend on the order of the polygons. Fails with
/// `NoPolygonFeatures` when the input is empty.
pub fn select_zone<'a>(
    polygons: impl IntoIterator<Item = &'a Polygon<GeoPoint2d>>,
) -> Result<UtmZone, GeoPlanarError> {
    let mut sum = 0.0;
    let mut count = 0usize;

    for polygon in polygons {
        let flat = polygon
            .outer_contour
            .cast_points(|p| Point2d::new(p.lon(), p.lat()));
        sum += ring_centroid(&flat)?.x();
        count += 1;
    }

    if count == 0 {
        return Err(GeoPlanarError::NoPolygonFeatures);
    }
    UtmZone::from_longitude(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn square_at(lon: f64, lat: f64) -> Polygon<GeoPoint2d> {
        vec![
            GeoPoint2d::lonlat(lon, lat),
            GeoPoint2d::lonlat(lon + 0.1, lat),
            GeoPoint2d::lonlat(lon + 0.1, lat + 0.1),
            GeoPoint2d::lonlat(lon, lat + 0.1),
        ]
        .into()
    }

    #[test]
    fn zone_formula() {
        assert_eq!(UtmZone::from_longitude(-180.0).unwrap().number(), 1);
        assert_eq!(UtmZone::from_longitude(0.0).unwrap().number(), 31);
        assert_eq!(UtmZone::from_longitude(9.0).unwrap().number(), 32);
        assert_eq!(UtmZone::from_longitude(179.9).unwrap().number(), 60);
    }

    #[test]
    fn antimeridian_clamped() {
        assert_eq!(UtmZone::from_longitude(180.0).unwrap().number(), 60);
    }

    #[test]
    fn out_of_domain_longitude_rejected() {
        assert_matches!(
            UtmZone::from_longitude(f64::NAN),
            Err(GeoPlanarError::InvalidZone(_))
        );
        assert_matches!(
            UtmZone::from_longitude(200.0),
            Err(GeoPlanarError::InvalidZone(_))
        );
    }

    #[test]
    fn definition_string() {
        assert_eq!(UtmZone::from_longitude(9.0).unwrap().definition(), "utm zone=32");
    }

    #[test]
    fn selection_is_order_independent() {
        let polygons = [
            square_at(8.0, 47.0),
            square_at(9.5, 48.0),
            square_at(10.0, 46.5),
        ];

        let zone = select_zone(&polygons).unwrap();
        let permuted = [
            polygons[2].clone(),
            polygons[0].clone(),
            polygons[1].clone(),
        ];
        assert_eq!(select_zone(&permuted).unwrap(), zone);
        assert_eq!(select_zone(&polygons).unwrap(), zone);
        assert_eq!(zone.number(), 32);
    }

    #[test]
    fn empty_input_rejected() {
        assert_matches!(
            select_zone(std::iter::empty::<&Polygon<GeoPoint2d>>()),
            Err(GeoPlanarError::NoPolygonFeatures)
        );
    }
}
