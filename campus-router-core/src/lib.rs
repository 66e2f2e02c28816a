//! Walking-route engine for an offline campus map.
//!
//! Path geometry is turned into an undirected walkway graph once per data
//! load; every route request snaps its two endpoints onto that graph and runs
//! a shortest-path search over it.

pub mod error;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod service;

pub use error::Error;
pub use geometry::{CampusBoundary, great_circle_distance};
pub use loading::{CampusDataConfig, PlaceLayerConfig, create_campus_model};
pub use model::{
    CampusModel, GeoPoint, NodeKey, Place, PlaceRegistry, RouteEndpoint, WalkwayGraph,
};
pub use routing::walking_route::{WalkingRoute, walking_minutes};
pub use service::RoutingService;

/// Node handle inside the walkway graph
pub type WalkwayNodeId = petgraph::graph::NodeIndex;

/// Distance in meters
pub type Meters = f64;

/// Assumed walking speed used for time estimates
pub const WALKING_SPEED_MPS: f64 = 1.4;

/// Decimal places kept when deduplicating coordinates into graph nodes
/// (5 places is roughly 1.1 m at the equator)
pub const KEY_PRECISION: i32 = 5;

/// Number of places returned by a search when no limit is given
pub const DEFAULT_SEARCH_LIMIT: usize = 6;
