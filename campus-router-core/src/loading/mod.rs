//! This module is responsible for loading campus data (walkway paths,
//! place layers and the campus outline) from `GeoJSON` and building a
//! routable campus model.

mod builder;
mod config;
mod features;

pub use builder::create_campus_model;
pub use config::{CampusDataConfig, PlaceLayerConfig};
pub use features::{parse_boundary, parse_place_layer, parse_walkway_lines};
