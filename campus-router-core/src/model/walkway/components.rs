//! Walkway network components - nodes and edges

use crate::{
    Meters,
    model::{GeoPoint, NodeKey},
};

/// Walkway graph node
#[derive(Debug, Clone)]
pub struct WalkwayNode {
    /// Quantized identity of the node
    pub key: NodeKey,
    /// Raw coordinate the node was first seen with
    pub geometry: GeoPoint,
}

/// Walkway graph edge (path segment)
#[derive(Debug, Clone, Copy)]
pub struct WalkwayEdge {
    /// Great-circle length of the segment in meters
    pub length: Meters,
}

impl WalkwayEdge {
    pub fn length(&self) -> Meters {
        self.length
    }
}
