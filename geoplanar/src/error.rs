//! Error type used by the crate.

use thiserror::Error;

/// Geoplanar error type.
#[derive(Debug, Error)]
pub enum GeoPlanarError {
    /// No Polygon or MultiPolygon feature to take a reference point from.
    #[error("no polygon feature to take a reference point from")]
    NoEligibleFeature,
    /// Coordinate arrays that are empty, ragged or contain non-finite values.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),
    /// A polygon ring with zero signed area.
    #[error("polygon ring has zero area")]
    DegeneratePolygon,
    /// Zone selection requested for a collection without Polygon features.
    #[error("no polygon features available for transformation")]
    NoPolygonFeatures,
    /// Longitude outside of the [-180, 180] range.
    #[error("longitude {0} is outside of the [-180, 180] range")]
    InvalidZone(f64),
    /// The projection provider failed or returned non-finite coordinates.
    #[error("projection failed: {0}")]
    Projection(String),
}
