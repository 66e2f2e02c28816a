use std::path::{Path, PathBuf};

use campus_router_core::prelude::*;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../data")
}

fn config() -> CampusDataConfig {
    let layer = |id: &str| PlaceLayerConfig {
        id: id.to_string(),
        label: String::new(),
        path: format!("{id}.geojson").into(),
    };
    CampusDataConfig {
        paths_file: "paths.geojson".into(),
        place_layers: vec![layer("buildings"), layer("landmarks"), layer("hostels")],
        boundary_file: Some("boundary.geojson".into()),
    }
    .relative_to(&data_dir())
}

#[test]
fn loads_sample_campus() {
    let model = create_campus_model(&config()).unwrap();

    assert_eq!(model.routing.graph().node_count(), 8);
    assert_eq!(model.routing.graph().edge_count(), 6);
    assert_eq!(model.places.len(), 5);
    assert!(model.boundary.is_some());
}

#[test]
fn gate_to_library() {
    let model = create_campus_model(&config()).unwrap();
    let route = model
        .route_between(
            &RouteEndpoint::Place("gate".into()),
            &RouteEndpoint::Place("library".into()),
        )
        .unwrap();

    assert_eq!(route.path.len(), 5);
    assert_eq!(route.path[0], GeoPoint::new(8.5440, 76.9040));
    assert_eq!(route.path[4], GeoPoint::new(8.5470, 76.9055));
    assert!(route.distance_m > 490.0 && route.distance_m < 505.0);
    assert_eq!(route.eta_minutes, 6);
    assert!(route.summary().starts_with("Route ready: 0.5"));
}

#[test]
fn hostel_lane_is_cut_off() {
    let model = create_campus_model(&config()).unwrap();
    let result = model.route_between(
        &RouteEndpoint::Place("lh".into()),
        &RouteEndpoint::Place("mh".into()),
    );
    assert!(matches!(result, Err(Error::Unreachable)));
}

#[test]
fn search_over_all_layers() {
    let model = create_campus_model(&config()).unwrap();

    let ground: Vec<_> = model.places.search("ground", DEFAULT_SEARCH_LIMIT);
    assert_eq!(ground.len(), 1);
    assert_eq!(ground[0].id, "ground");

    assert_eq!(model.places.search("", DEFAULT_SEARCH_LIMIT).len(), 5);
    assert_eq!(model.place("mh").unwrap().type_label, "hostel");
}

#[test]
fn boundary_check() {
    let model = create_campus_model(&config()).unwrap();
    assert!(model.is_on_campus(GeoPoint::new(8.5450, 76.9050)));
    assert!(!model.is_on_campus(GeoPoint::new(8.5600, 76.9050)));
}

fn assert_not_found(config: &CampusDataConfig) {
    match create_campus_model(config) {
        Err(Error::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected a not-found error, got {other:?}"),
    }
}

#[test]
fn missing_files_are_reported() {
    let missing = data_dir().join("nope.geojson");

    let mut no_paths = config();
    no_paths.paths_file = missing.clone();
    assert_not_found(&no_paths);

    let mut no_layer = config();
    no_layer.place_layers[1].path = missing.clone();
    assert_not_found(&no_layer);

    let mut no_boundary = config();
    no_boundary.boundary_file = Some(missing);
    assert_not_found(&no_boundary);
}
