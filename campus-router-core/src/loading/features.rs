//! `GeoJSON` layer parsing for paths, places and the campus outline

use geo::{Centroid, Geometry, LineString, Polygon};
use geojson::{Feature, GeoJson};
use log::{debug, warn};
use serde_json::Value as JsonValue;

use crate::{
    Error,
    geometry::CampusBoundary,
    model::{GeoPoint, Place},
};

fn read_features(source: &str) -> Result<Vec<Feature>, Error> {
    let parsed = source
        .parse::<GeoJson>()
        .map_err(|e| Error::GeoJsonError(e.to_string()))?;

    Ok(match parsed {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(geometry) => vec![Feature::from(geometry)],
    })
}

fn feature_geometry(feature: &mut Feature, idx: usize) -> Result<Option<Geometry<f64>>, Error> {
    feature
        .geometry
        .take()
        .map(Geometry::<f64>::try_from)
        .transpose()
        .map_err(|e| Error::GeoJsonError(format!("feature #{idx}: {e}")))
}

fn string_property(feature: &Feature, key: &str) -> Option<String> {
    match feature.property(key)? {
        JsonValue::String(s) if !s.trim().is_empty() => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads walkway lines from a `GeoJSON` document.
///
/// `LineString` features give one line each, `MultiLineString` features one
/// line per part. Anything else is skipped.
///
/// # Errors
///
/// Returns an error when the document is not valid `GeoJSON`
pub fn parse_walkway_lines(source: &str) -> Result<Vec<LineString<f64>>, Error> {
    let mut lines = Vec::new();

    for (idx, mut feature) in read_features(source)?.into_iter().enumerate() {
        match feature_geometry(&mut feature, idx)? {
            Some(Geometry::LineString(line)) => lines.push(line),
            Some(Geometry::MultiLineString(multi)) => lines.extend(multi),
            Some(_) => debug!("Path feature #{idx} is not a line, skipping"),
            None => debug!("Path feature #{idx} has no geometry, skipping"),
        }
    }

    Ok(lines)
}

/// Reads named places from a `GeoJSON` point layer.
///
/// Recognized properties: `id` and `name` (required), `category`,
/// `aliases` (array of strings) and `description`. Polygon features are
/// placed at their centroid.
///
/// # Errors
///
/// Returns an error when the document is not valid `GeoJSON`
pub fn parse_place_layer(layer_id: &str, source: &str) -> Result<Vec<Place>, Error> {
    let mut places = Vec::new();

    for (idx, mut feature) in read_features(source)?.into_iter().enumerate() {
        let (Some(id), Some(name)) = (
            string_property(&feature, "id"),
            string_property(&feature, "name"),
        ) else {
            warn!("Place #{idx} in layer '{layer_id}' lacks an id or name, skipping");
            continue;
        };

        let location = match feature_geometry(&mut feature, idx)? {
            Some(Geometry::Point(point)) => point,
            Some(other) => match other.centroid() {
                Some(centroid) => centroid,
                None => {
                    warn!("Place '{id}' has an empty geometry, skipping");
                    continue;
                }
            },
            None => {
                warn!("Place '{id}' has no geometry, skipping");
                continue;
            }
        };

        let mut place = Place::new(id, name, layer_id, GeoPoint::from(location));
        if let Some(category) = string_property(&feature, "category") {
            place = place.with_category(category);
        }
        if let Some(description) = string_property(&feature, "description") {
            place = place.with_description(description);
        }
        if let Some(aliases) = feature.property("aliases").and_then(JsonValue::as_array) {
            place = place.with_aliases(aliases.iter().filter_map(JsonValue::as_str));
        }
        places.push(place);
    }

    Ok(places)
}

/// Reads the campus outline from every polygon in a `GeoJSON` document
///
/// # Errors
///
/// Returns an error for invalid `GeoJSON` or when no polygon is present
pub fn parse_boundary(source: &str) -> Result<CampusBoundary, Error> {
    let mut polygons: Vec<Polygon<f64>> = Vec::new();

    for (idx, mut feature) in read_features(source)?.into_iter().enumerate() {
        match feature_geometry(&mut feature, idx)? {
            Some(Geometry::Polygon(polygon)) => polygons.push(polygon),
            Some(Geometry::MultiPolygon(multi)) => polygons.extend(multi),
            _ => debug!("Boundary feature #{idx} is not a polygon, skipping"),
        }
    }

    if polygons.is_empty() {
        return Err(Error::InvalidData("Boundary file contains no polygon".to_string()));
    }
    Ok(CampusBoundary::from_polygons(polygons))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {},
             "geometry": {"type": "LineString", "coordinates": [[76.9, 8.5], [76.9, 8.6]]}},
            {"type": "Feature", "properties": {},
             "geometry": {"type": "MultiLineString", "coordinates": [
                [[76.9, 8.6], [77.0, 8.6]],
                [[77.0, 8.6], [77.0, 8.7], [77.1, 8.7]]
             ]}},
            {"type": "Feature", "properties": {},
             "geometry": {"type": "Point", "coordinates": [76.9, 8.5]}},
            {"type": "Feature", "properties": {}, "geometry": null}
        ]
    }"#;

    const PLACES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature",
             "properties": {"id": "lh", "name": "Lecture Hall", "aliases": ["LH", 4]},
             "geometry": {"type": "Point", "coordinates": [76.9058, 8.5458]}},
            {"type": "Feature",
             "properties": {"id": 12, "name": "Canteen", "category": "food",
                            "description": "Open till 6"},
             "geometry": {"type": "Polygon", "coordinates": [[
                [0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]
             ]]}},
            {"type": "Feature", "properties": {"name": "Nameless id"},
             "geometry": {"type": "Point", "coordinates": [1.0, 1.0]}}
        ]
    }"#;

    const UNIT_SQUARE: &str = r#"{"type": "Polygon", "coordinates": [[
        [0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]
    ]]}"#;

    #[test]
    fn path_lines_include_multiline_parts() {
        let lines = parse_walkway_lines(PATHS).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].0.len(), 3);
        assert_eq!(lines[0].0[1].y, 8.6);
    }

    #[test]
    fn places_read_properties_and_centroids() {
        let places = parse_place_layer("buildings", PLACES).unwrap();
        assert_eq!(places.len(), 2);

        let lh = &places[0];
        assert_eq!(lh.location, GeoPoint::new(8.5458, 76.9058));
        assert_eq!(lh.type_label, "building");
        assert_eq!(lh.aliases, vec!["lecture hall", "lh"]);

        let canteen = &places[1];
        assert_eq!(canteen.id, "12");
        assert_eq!(canteen.type_label, "food");
        assert_eq!(canteen.description, "Open till 6");
        assert_eq!(canteen.location, GeoPoint::new(1.0, 1.0));
    }

    #[test]
    fn boundary_requires_polygon() {
        assert!(matches!(parse_boundary(PATHS), Err(Error::InvalidData(_))));

        let boundary = parse_boundary(UNIT_SQUARE).unwrap();
        assert!(boundary.contains(GeoPoint::new(0.5, 0.5)));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            parse_walkway_lines("{not json"),
            Err(Error::GeoJsonError(_))
        ));
    }
}
