//! Geographic point value type and the quantized key used for node identity

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::KEY_PRECISION;

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a point from a `[longitude, latitude]` pair (`GeoJSON` axis order)
    pub const fn from_lng_lat(lng: f64, lat: f64) -> Self {
        Self { lat, lng }
    }

    pub fn key(&self) -> NodeKey {
        NodeKey::from(*self)
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(p: GeoPoint) -> Self {
        Point::new(p.lng, p.lat)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        Coord { x: p.lng, y: p.lat }
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(p: Point<f64>) -> Self {
        Self::from_lng_lat(p.x(), p.y())
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(c: Coord<f64>) -> Self {
        Self::from_lng_lat(c.x, c.y)
    }
}

/// Coordinate rounded to `KEY_PRECISION` decimal places.
///
/// Two raw coordinates with the same key are the same walkway node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    lat: i64,
    lng: i64,
}

impl NodeKey {
    #[allow(clippy::cast_possible_truncation)]
    fn quantize(value: f64) -> i64 {
        let scale = 10f64.powi(KEY_PRECISION);
        (value * scale).round() as i64
    }

    /// Center of the quantization cell
    #[allow(clippy::cast_precision_loss)]
    pub fn to_point(self) -> GeoPoint {
        let scale = 10f64.powi(KEY_PRECISION);
        GeoPoint::new(self.lat as f64 / scale, self.lng as f64 / scale)
    }
}

impl From<GeoPoint> for NodeKey {
    fn from(p: GeoPoint) -> Self {
        Self {
            lat: Self::quantize(p.lat),
            lng: Self::quantize(p.lng),
        }
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = self.to_point();
        let precision = KEY_PRECISION as usize;
        write!(f, "{:.precision$},{:.precision$}", p.lat, p.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_coordinates_share_a_key() {
        let a = GeoPoint::new(8.545_891, 76.905_851);
        let b = GeoPoint::new(8.545_889_9, 76.905_849_8);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn coordinates_one_step_apart_differ() {
        let a = GeoPoint::new(8.54589, 76.90585);
        let b = GeoPoint::new(8.54590, 76.90585);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn key_displays_with_fixed_precision() {
        let key = GeoPoint::new(8.5, -76.123_456).key();
        assert_eq!(key.to_string(), "8.50000,-76.12346");
    }

    #[test]
    fn geo_point_uses_lng_as_x() {
        let p: Point<f64> = GeoPoint::new(1.0, 2.0).into();
        assert_eq!(p.x(), 2.0);
        assert_eq!(p.y(), 1.0);
        assert_eq!(GeoPoint::from(p), GeoPoint::new(1.0, 2.0));
    }
}
