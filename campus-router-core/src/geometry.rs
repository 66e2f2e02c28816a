//! Distance and containment helpers shared by the graph builder,
//! the snapping step and the campus boundary check.

use geo::{BoundingRect, Distance, Haversine, Intersects, MultiPolygon, Point, Polygon, Rect};

use crate::{Meters, model::GeoPoint};

/// Great-circle distance in meters between two points
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint) -> Meters {
    Haversine.distance(Point::from(a), Point::from(b))
}

/// Campus outline used to decide whether a query point is on campus
#[derive(Debug, Clone)]
pub struct CampusBoundary {
    area: MultiPolygon<f64>,
}

impl CampusBoundary {
    pub fn new(area: MultiPolygon<f64>) -> Self {
        Self { area }
    }

    pub fn from_polygons(polygons: Vec<Polygon<f64>>) -> Self {
        Self::new(MultiPolygon::new(polygons))
    }

    /// True when the point lies inside the outline or on its edge
    pub fn contains(&self, point: GeoPoint) -> bool {
        Point::from(point).intersects(&self.area)
    }

    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.area.bounding_rect()
    }
}

#[cfg(test)]
mod tests {
    use geo::polygon;

    use super::*;

    fn square() -> CampusBoundary {
        CampusBoundary::from_polygons(vec![polygon![
            (x: 76.0, y: 8.0),
            (x: 77.0, y: 8.0),
            (x: 77.0, y: 9.0),
            (x: 76.0, y: 9.0),
            (x: 76.0, y: 8.0),
        ]])
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = great_circle_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = GeoPoint::new(8.54589, 76.90585);
        let b = GeoPoint::new(8.54712, 76.90431);
        assert_eq!(great_circle_distance(a, a), 0.0);
        assert!((great_circle_distance(a, b) - great_circle_distance(b, a)).abs() < 1e-9);
    }

    #[test]
    fn boundary_containment() {
        let campus = square();
        assert!(campus.contains(GeoPoint::new(8.5, 76.5)));
        assert!(campus.contains(GeoPoint::new(8.0, 76.5)));
        assert!(!campus.contains(GeoPoint::new(9.5, 76.5)));
    }

    #[test]
    fn boundary_extent() {
        let rect = square().bounding_rect().unwrap();
        assert_eq!(rect.min().x, 76.0);
        assert_eq!(rect.max().y, 9.0);
    }
}
