use geo::{Coord, LineString};
use geojson::{Feature, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::walking_route::WalkingRoute;
use crate::Error;

impl WalkingRoute {
    /// Converts the route to a `GeoJSON` `LineString` feature.
    ///
    /// A zero-length route has a single point; it is emitted as a degenerate
    /// two-coordinate line so the geometry stays a valid `LineString`.
    pub fn to_geojson(&self) -> Result<Feature, Error> {
        let mut coords: Vec<Coord<f64>> = self.path.iter().map(|&p| p.into()).collect();
        if let &[only] = coords.as_slice() {
            coords.push(only);
        }
        let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "distance_m": self.distance_m,
                "eta_minutes": self.eta_minutes,
                "summary": self.summary(),
            }
        });

        serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::GeoPoint;

    use super::*;

    #[test]
    fn route_feature_has_line_and_properties() {
        let route = WalkingRoute {
            distance_m: 1000.0,
            eta_minutes: 12,
            path: vec![GeoPoint::new(8.5, 76.9), GeoPoint::new(8.51, 76.9)],
            start_snap_m: 0.0,
            end_snap_m: 3.0,
        };
        let value: serde_json::Value =
            serde_json::from_str(&route.to_geojson_string().unwrap()).unwrap();

        assert_eq!(value["geometry"]["type"], "LineString");
        assert_eq!(value["geometry"]["coordinates"][1][0], 76.9);
        assert_eq!(value["geometry"]["coordinates"][1][1], 8.51);
        assert_eq!(value["properties"]["eta_minutes"], 12);
    }

    #[test]
    fn single_point_route_is_still_a_line() {
        let route = WalkingRoute {
            distance_m: 0.0,
            eta_minutes: 1,
            path: vec![GeoPoint::new(1.0, 2.0)],
            start_snap_m: 0.0,
            end_snap_m: 0.0,
        };
        let value: serde_json::Value =
            serde_json::from_str(&route.to_geojson_string().unwrap()).unwrap();
        assert_eq!(value["geometry"]["coordinates"].as_array().unwrap().len(), 2);
    }
}
