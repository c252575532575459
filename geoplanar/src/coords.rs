//! Depth-agnostic coordinate trees for GeoJSON geometries.

use geojson::{Position, Value};

use crate::error::GeoPlanarError;
use crate::point::Point2d;

/// The coordinate payload of a GeoJSON geometry, of arbitrary nesting depth.
///
/// GeoJSON nests positions deeper the more complex the geometry gets: a
/// Polygon is three levels deep (rings, vertices, pair), a MultiPolygon is
/// four. Keeping the payload as a recursive tree lets a single transform
/// handle every geometry type without branching on the type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateArray {
    /// A single coordinate pair.
    Leaf(Point2d),
    /// An ordered sequence of nested coordinate arrays.
    Nested(Vec<CoordinateArray>),
}

impl CoordinateArray {
    /// Extracts the coordinate payload of a GeoJSON geometry value.
    ///
    /// Positions with fewer than two elements or non-finite values, and
    /// empty coordinate sequences, are rejected. A third (elevation) element
    /// is dropped.
    pub fn from_value(value: &Value) -> Result<Self, GeoPlanarError> {
        match value {
            Value::Point(p) => Self::leaf(p),
            Value::MultiPoint(ps) | Value::LineString(ps) => Self::nested(ps, Self::leaf),
            Value::MultiLineString(ls) | Value::Polygon(ls) => {
                Self::nested(ls, |l| Self::nested(l, Self::leaf))
            }
            Value::MultiPolygon(mp) => {
                Self::nested(mp, |p| Self::nested(p, |l| Self::nested(l, Self::leaf)))
            }
            Value::GeometryCollection(_) => Err(GeoPlanarError::MalformedGeometry(
                "geometry collections have no coordinate payload".into(),
            )),
        }
    }

    /// Applies `op` to every coordinate pair, preserving the nesting
    /// structure and element order.
    pub fn map(&self, op: &impl Fn(Point2d) -> Point2d) -> Self {
        match self {
            Self::Leaf(point) => Self::Leaf(op(*point)),
            Self::Nested(items) => Self::Nested(items.iter().map(|item| item.map(op)).collect()),
        }
    }

    /// Nesting depth of the tree, counting the leaf level as 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Nested(items) => 1 + items.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    /// Rebuilds a geometry value with the same type tag as `like`.
    ///
    /// Fails with `MalformedGeometry` if the nesting depth of the tree does
    /// not match the geometry type.
    pub fn to_value(&self, like: &Value) -> Result<Value, GeoPlanarError> {
        Ok(match like {
            Value::Point(_) => Value::Point(self.position()?),
            Value::MultiPoint(_) => Value::MultiPoint(self.positions()?),
            Value::LineString(_) => Value::LineString(self.positions()?),
            Value::MultiLineString(_) => Value::MultiLineString(self.position_lists()?),
            Value::Polygon(_) => Value::Polygon(self.position_lists()?),
            Value::MultiPolygon(_) => Value::MultiPolygon(
                self.seq()?
                    .iter()
                    .map(Self::position_lists)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Value::GeometryCollection(_) => {
                return Err(GeoPlanarError::MalformedGeometry(
                    "geometry collections have no coordinate payload".into(),
                ))
            }
        })
    }

    fn leaf(position: &Position) -> Result<Self, GeoPlanarError> {
        match position[..] {
            [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Self::Leaf(Point2d::new(x, y))),
            [_, _, ..] => Err(GeoPlanarError::MalformedGeometry(
                "non-finite coordinate".into(),
            )),
            _ => Err(GeoPlanarError::MalformedGeometry(
                "position must contain at least two numbers".into(),
            )),
        }
    }

    fn nested<T>(
        items: &[T],
        convert: impl Fn(&T) -> Result<Self, GeoPlanarError>,
    ) -> Result<Self, GeoPlanarError> {
        if items.is_empty() {
            return Err(GeoPlanarError::MalformedGeometry(
                "empty coordinate sequence".into(),
            ));
        }
        Ok(Self::Nested(
            items.iter().map(convert).collect::<Result<Vec<_>, _>>()?,
        ))
    }

    fn seq(&self) -> Result<&[CoordinateArray], GeoPlanarError> {
        match self {
            Self::Nested(items) => Ok(items),
            Self::Leaf(_) => Err(GeoPlanarError::MalformedGeometry(
                "coordinate depth does not match geometry type".into(),
            )),
        }
    }

    fn position(&self) -> Result<Position, GeoPlanarError> {
        match self {
            Self::Leaf(point) => Ok(vec![point.x(), point.y()]),
            Self::Nested(_) => Err(GeoPlanarError::MalformedGeometry(
                "coordinate depth does not match geometry type".into(),
            )),
        }
    }

    fn positions(&self) -> Result<Vec<Position>, GeoPlanarError> {
        self.seq()?.iter().map(Self::position).collect()
    }

    fn position_lists(&self) -> Result<Vec<Vec<Position>>, GeoPlanarError> {
        self.seq()?.iter().map(Self::positions).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn square_ring() -> Vec<Position> {
        vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ]
    }

    #[test]
    fn polygon_depth() {
        let value = Value::Polygon(vec![square_ring()]);
        let coords = CoordinateArray::from_value(&value).unwrap();
        assert_eq!(coords.depth(), 3);
    }

    #[test]
    fn multi_polygon_depth() {
        let value = Value::MultiPolygon(vec![vec![square_ring()], vec![square_ring()]]);
        let coords = CoordinateArray::from_value(&value).unwrap();
        assert_eq!(coords.depth(), 4);
    }

    #[test]
    fn map_preserves_structure() {
        let value = Value::MultiPolygon(vec![vec![square_ring()]]);
        let coords = CoordinateArray::from_value(&value).unwrap();
        let shifted = coords.map(&|p| p.translate(10.0, -5.0));

        assert_eq!(shifted.depth(), coords.depth());
        let rebuilt = shifted.to_value(&value).unwrap();
        match rebuilt {
            Value::MultiPolygon(mp) => {
                assert_eq!(mp.len(), 1);
                assert_eq!(mp[0][0].len(), 5);
                assert_eq!(mp[0][0][1], vec![11.0, -5.0]);
            }
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn short_position_rejected() {
        let value = Value::Polygon(vec![vec![vec![0.0, 0.0], vec![1.0]]]);
        assert_matches!(
            CoordinateArray::from_value(&value),
            Err(GeoPlanarError::MalformedGeometry(_))
        );
    }

    #[test]
    fn empty_sequence_rejected() {
        let value = Value::Polygon(vec![]);
        assert_matches!(
            CoordinateArray::from_value(&value),
            Err(GeoPlanarError::MalformedGeometry(_))
        );
    }

    #[test]
    fn non_finite_rejected() {
        let value = Value::Point(vec![f64::NAN, 0.0]);
        assert_matches!(
            CoordinateArray::from_value(&value),
            Err(GeoPlanarError::MalformedGeometry(_))
        );
    }

    #[test]
    fn elevation_dropped() {
        let value = Value::Point(vec![1.0, 2.0, 100.0]);
        let coords = CoordinateArray::from_value(&value).unwrap();
        assert_eq!(coords.to_value(&value).unwrap(), Value::Point(vec![1.0, 2.0]));
    }

    #[test]
    fn depth_mismatch_rejected() {
        let point = Value::Point(vec![1.0, 2.0]);
        let coords = CoordinateArray::from_value(&point).unwrap();
        let polygon = Value::Polygon(vec![square_ring()]);
        assert_matches!(
            coords.to_value(&polygon),
            Err(GeoPlanarError::MalformedGeometry(_))
        );
    }
}
