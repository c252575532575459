//! Planar and geodetic point types.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// A point in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point2d {
    x: f64,
    y: f64,
}

impl Point2d {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns x coordinate of the point.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns y coordinate of the point.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the point translated by the given deltas.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl AbsDiffEq for Point2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

/// 2d point on the surface of the WGS84 ellipsoid, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint2d {
    /// Creates a new point from latitude and longitude values.
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Creates a new point from longitude and latitude values.
    pub const fn lonlat(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn translate() {
        let point = Point2d::new(1.0, 2.0);
        assert_abs_diff_eq!(point.translate(-1.0, 0.5), Point2d::new(0.0, 2.5));
    }

    #[test]
    fn latlon_lonlat_agree() {
        assert_eq!(GeoPoint2d::latlon(48.0, 9.0), GeoPoint2d::lonlat(9.0, 48.0));
    }
}
