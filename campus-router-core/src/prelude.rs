pub use crate::{DEFAULT_SEARCH_LIMIT, KEY_PRECISION, WALKING_SPEED_MPS};

// Re-export key components
pub use crate::geometry::{CampusBoundary, great_circle_distance};
pub use crate::loading::{
    CampusDataConfig, PlaceLayerConfig, create_campus_model, parse_boundary, parse_place_layer,
    parse_walkway_lines,
};
pub use crate::model::{CampusModel, Place, PlaceRegistry, RouteEndpoint, WalkwayGraph};
pub use crate::routing::dijkstra::{ShortestPath, shortest_path};
pub use crate::routing::walking_route::{WalkingRoute, walking_minutes};
pub use crate::service::RoutingService;

// Core value types
pub use crate::Error;
pub use crate::Meters;
pub use crate::WalkwayNodeId;
pub use crate::model::{GeoPoint, NodeKey};
