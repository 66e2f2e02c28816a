//! Shortest-path search over the walkway graph and route formatting

pub mod dijkstra;
pub mod to_geojson;
pub mod walking_route;
