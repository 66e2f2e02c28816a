use std::{fs, io, path::Path};

use geo::{ConvexHull, Intersects, MultiPoint, Point};
use itertools::Itertools;
use log::info;

use super::config::CampusDataConfig;
use super::features::{parse_boundary, parse_place_layer, parse_walkway_lines};
use crate::{CampusModel, Error, PlaceRegistry, RoutingService};

/// Creates a campus model from the files named in the configuration
///
/// # Errors
///
/// Returns an error if a file is missing, unreadable or not valid `GeoJSON`
pub fn create_campus_model(config: &CampusDataConfig) -> Result<CampusModel, Error> {
    validate_config(config)?;

    info!("Processing walkway paths: {}", config.paths_file.display());
    let lines = parse_walkway_lines(&read_file(&config.paths_file)?)?;
    let routing = RoutingService::build_graph(&lines);

    let mut places = PlaceRegistry::new();
    for layer in &config.place_layers {
        let layer_places = parse_place_layer(&layer.id, &read_file(&layer.path)?)?;
        info!(
            "Loaded {} places from layer '{}'",
            layer_places.len(),
            layer.display_name()
        );
        layer_places.into_iter().for_each(|place| places.register(place));
    }

    let boundary = match &config.boundary_file {
        Some(path) => {
            info!("Processing campus boundary: {}", path.display());
            Some(parse_boundary(&read_file(path)?)?)
        }
        None => None,
    };

    let model = CampusModel::new(routing, places, boundary);
    validate_place_coverage(&model);
    validate_place_connectivity(&model);

    info!("Campus model created successfully");
    Ok(model)
}

fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|e| {
        Error::IoError(io::Error::new(e.kind(), format!("{}: {e}", path.display())))
    })
}

fn missing_file(what: &str, path: &Path) -> Error {
    Error::IoError(io::Error::new(
        io::ErrorKind::NotFound,
        format!("{what} not found: {}", path.display()),
    ))
}

fn validate_config(config: &CampusDataConfig) -> Result<(), Error> {
    if !config.paths_file.exists() {
        return Err(missing_file("Paths file", &config.paths_file));
    }

    for layer in &config.place_layers {
        if !layer.path.exists() {
            return Err(missing_file(&format!("Place layer '{}'", layer.id), &layer.path));
        }
    }

    if let Some(boundary) = &config.boundary_file
        && !boundary.exists()
    {
        return Err(missing_file("Boundary file", boundary));
    }

    Ok(())
}

/// Number of places outside the convex hull of the walkway nodes
fn places_outside_hull(model: &CampusModel) -> usize {
    let graph = model.routing.graph();
    if graph.is_empty() {
        return 0;
    }

    let graph_nodes: MultiPoint = graph.node_points().map(Point::from).collect();
    let graph_hull = graph_nodes.convex_hull();

    model
        .places
        .iter()
        .filter(|place| !Point::from(place.location).intersects(&graph_hull))
        .count()
}

#[allow(clippy::cast_precision_loss)]
fn validate_place_coverage(model: &CampusModel) {
    let places_outside_hull = places_outside_hull(model);
    if places_outside_hull == 0 {
        return;
    }

    let total_places = model.places.len();
    let percentage = (places_outside_hull as f64 / total_places as f64) * 100.0;
    log::warn!(
        "{places_outside_hull} of {total_places} places ({percentage:.1}%) are outside \
        the walkway network coverage area. Routes to them end at the nearest path node."
    );
}

/// Ids of places that snap outside the network component holding most
/// places. On equal counts the component of the earlier registered place wins.
fn isolated_places(model: &CampusModel) -> Vec<&str> {
    let routing = &model.routing;
    let labels = routing.graph().component_labels();

    let snapped: Vec<_> = model
        .places
        .iter()
        .filter_map(|place| {
            let (node, _) = routing.snap(place.location).ok()?;
            Some((place.id.as_str(), labels[node.index()]))
        })
        .collect();

    let counts = snapped.iter().map(|&(_, component)| component).counts();
    let Some(main) = snapped
        .iter()
        .rev()
        .map(|&(_, component)| component)
        .max_by_key(|component| counts[component])
    else {
        return Vec::new();
    };

    snapped
        .into_iter()
        .filter(|&(_, component)| component != main)
        .map(|(id, _)| id)
        .collect()
}

/// Warns about places cut off from the rest of the walkway network;
/// routes to them from most other places come back unreachable.
fn validate_place_connectivity(model: &CampusModel) {
    let isolated = isolated_places(model);
    if !isolated.is_empty() {
        log::warn!(
            "{} places are not connected to the rest of the walkway network: {}",
            isolated.len(),
            isolated.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use geo::{LineString, line_string};

    use super::*;
    use crate::model::{GeoPoint, Place};

    fn model(lines: &[LineString<f64>], places: Vec<Place>) -> CampusModel {
        CampusModel::new(
            RoutingService::build_graph(lines),
            places.into_iter().collect(),
            None,
        )
    }

    fn place(id: &str, lat: f64, lng: f64) -> Place {
        Place::new(id, id, "buildings", GeoPoint::new(lat, lng))
    }

    fn mainland_and_island() -> Vec<LineString<f64>> {
        vec![
            line_string![(x: 76.900, y: 8.540), (x: 76.901, y: 8.540), (x: 76.901, y: 8.541)],
            line_string![(x: 76.910, y: 8.550), (x: 76.911, y: 8.550)],
        ]
    }

    #[test]
    fn island_place_registered_first_is_the_one_reported() {
        let m = model(
            &mainland_and_island(),
            vec![
                place("boathouse", 8.550, 76.911),
                place("gate", 8.540, 76.900),
                place("library", 8.541, 76.901),
            ],
        );
        assert_eq!(isolated_places(&m), vec!["boathouse"]);
    }

    #[test]
    fn connected_places_are_not_reported() {
        let m = model(
            &mainland_and_island(),
            vec![place("gate", 8.540, 76.900), place("library", 8.541, 76.901)],
        );
        assert!(isolated_places(&m).is_empty());
        assert!(isolated_places(&CampusModel::default()).is_empty());
    }

    #[test]
    fn counts_places_outside_network_hull() {
        let m = model(
            &mainland_and_island(),
            vec![
                place("gate", 8.540, 76.900),
                place("inside", 8.545, 76.9055),
                place("far", 8.600, 76.950),
            ],
        );
        assert_eq!(places_outside_hull(&m), 1);
        assert_eq!(places_outside_hull(&CampusModel::default()), 0);
    }
}
