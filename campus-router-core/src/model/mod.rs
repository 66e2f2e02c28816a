//! Data model for campus walking routes
//!
//! Contains the walkway graph, the place registry and the model that ties
//! them together for route requests.

pub mod campus_model;
pub mod places;
pub mod point;
pub mod walkway;

pub use campus_model::{CampusModel, RouteEndpoint};
pub use places::{Place, PlaceRegistry};
pub use point::{GeoPoint, NodeKey};
pub use walkway::{WalkwayEdge, WalkwayGraph, WalkwayNode};
