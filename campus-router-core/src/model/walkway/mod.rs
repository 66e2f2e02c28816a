//! Pedestrian path network model

pub mod components;
pub mod network;

pub use components::{WalkwayEdge, WalkwayNode};
pub use network::WalkwayGraph;
