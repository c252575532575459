//! Projection seam between geodetic and planar coordinates.
//!
//! The pipeline never does ellipsoidal math itself; it goes through the
//! [`Projection`] trait so tests can inject a deterministic stub. The
//! default provider, [`UtmProjection`], is built on the `geodesy` crate and
//! is available behind the `geodesy` cargo feature.

/// Converts points between two coordinate systems.
pub trait Projection {
    /// Type of the points the projection takes as input.
    type InPoint;
    /// Type of the points the projection produces.
    type OutPoint;

    /// Converts a point from the input into the output coordinate system.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;

    /// Converts a point from the output back into the input coordinate
    /// system.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

#[cfg(feature = "geodesy")]
mod geodesy;

#[cfg(feature = "geodesy")]
pub use self::geodesy::UtmProjection;
