//! Localization and planar projection of GeoJSON polygon collections.
//!
//! The crate does two things:
//!
//! * The [`localize`] module strips the absolute geographic position from a
//!   feature collection by translating every vertex by a fixed offset. The
//!   operation is reversible: [`localize::restore`] with the same offset
//!   reproduces the original coordinates.
//! * [`pipeline::EuclideanProjector`] projects the Polygon features of a
//!   collection into a local, meter-based Euclidean frame. The planar zone
//!   is picked from the average polygon longitude, the output is recentered
//!   on the origin and optionally rotated and scaled.
//!
//! The ellipsoidal math lives behind the [`projection::Projection`] trait.
//! The bundled provider uses the `geodesy` crate and can be switched off by
//! disabling the `geodesy` cargo feature, in which case the caller supplies
//! its own [`projection::Projection`] implementation to
//! [`pipeline::EuclideanProjector::project_with`].
//!
//! ```
//! use geoplanar::localize::{localize_with_reference, restore};
//! # fn run() -> Result<(), geoplanar::GeoPlanarError> {
//! # let collection = geojson::FeatureCollection {
//! #     bbox: None,
//! #     features: vec![geojson::Feature {
//! #         bbox: None,
//! #         geometry: Some(geojson::Geometry::new(geojson::Value::Polygon(vec![vec![
//! #             vec![30.0, 10.0],
//! #             vec![31.0, 10.0],
//! #             vec![31.0, 11.0],
//! #             vec![30.0, 10.0],
//! #         ]]))),
//! #         id: None,
//! #         properties: None,
//! #         foreign_members: None,
//! #     }],
//! #     foreign_members: None,
//! # };
//! let (anonymized, offset) = localize_with_reference(&collection)?;
//! let original = restore(&anonymized, offset)?;
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

pub mod centroid;
pub mod contour;
pub mod coords;
mod error;
pub mod geojson;
pub mod localize;
pub mod pipeline;
pub mod point;
pub mod polygon;
pub mod projection;
pub mod zone;

pub use error::GeoPlanarError;
