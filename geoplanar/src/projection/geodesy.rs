use geodesy::prelude::*;

use crate::error::GeoPlanarError;
use crate::point::{GeoPoint2d, Point2d};
use crate::projection::Projection;
use crate::zone::UtmZone;

/// WGS84 to UTM transform for a fixed zone, backed by the `geodesy` crate.
///
/// Forward output is in meters. Non-finite results are reported as a failed
/// projection rather than passed through.
pub struct UtmProjection {
    context: Minimal,
    op: OpHandle,
}

impl UtmProjection {
    /// Creates a transform for the given zone.
    pub fn new(zone: UtmZone) -> Result<Self, GeoPlanarError> {
        let mut context = Minimal::new();
        let op = context.op(&zone.definition()).map_err(|err| {
            GeoPlanarError::Projection(format!(
                "cannot create operator for zone {}: {err}",
                zone.number()
            ))
        })?;
        Ok(Self { context, op })
    }
}

impl Projection for UtmProjection {
    type InPoint = GeoPoint2d;
    type OutPoint = Point2d;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let mut data = [Coor2D::geo(input.lat(), input.lon())];
        self.context.apply(self.op, Fwd, &mut data).ok()?;

        if !data[0].0[0].is_finite() || !data[0].0[1].is_finite() {
            return None;
        }

        Some(Point2d::new(data[0].0[0], data[0].0[1]))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let mut data = [Coor2D([input.x(), input.y()])];
        self.context.apply(self.op, Inv, &mut data).ok()?;

        Some(GeoPoint2d::latlon(
            data[0].0[1].to_degrees(),
            data[0].0[0].to_degrees(),
        ))
    }
}
