//! Routing service owning one loaded walkway graph

use geo::LineString;
use petgraph::graph::NodeIndex;

use crate::{
    Error, Meters,
    model::{GeoPoint, WalkwayGraph},
    routing::{dijkstra::shortest_path, walking_route::WalkingRoute},
};

/// Walking router over an immutable walkway graph.
///
/// Built once per path-data load and shared read-only between requests;
/// every call to [`RoutingService::route`] allocates its own search state.
/// Reloading data means building a new service and replacing the old one.
#[derive(Debug, Clone, Default)]
pub struct RoutingService {
    graph: WalkwayGraph,
}

impl RoutingService {
    pub fn new(graph: WalkwayGraph) -> Self {
        Self { graph }
    }

    /// Builds a fresh service from path line features
    pub fn build_graph<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a LineString<f64>>,
    {
        let graph = WalkwayGraph::from_lines(lines);
        log::info!(
            "Walkway graph built with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Self { graph }
    }

    pub fn graph(&self) -> &WalkwayGraph {
        &self.graph
    }

    pub fn has_data(&self) -> bool {
        !self.graph.is_empty()
    }

    /// Snaps a point to its nearest walkway node
    ///
    /// # Errors
    ///
    /// `NoGraphData` when no paths are loaded
    pub fn snap(&self, point: GeoPoint) -> Result<(NodeIndex, Meters), Error> {
        if self.graph.is_empty() {
            return Err(Error::NoGraphData);
        }
        self.graph.nearest_node(point).ok_or(Error::NoNearestNode)
    }

    /// Computes the shortest walking route between two points.
    ///
    /// Both points are snapped to their nearest walkway node first. Points
    /// that snap to the same node give a single-point route of length 0;
    /// rejecting identical selections is up to the caller.
    ///
    /// # Errors
    ///
    /// `NoGraphData` for an empty graph, `Unreachable` when the snapped
    /// nodes lie in different connected parts of the network.
    pub fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<WalkingRoute, Error> {
        let (start_node, start_snap) = self.snap(start)?;
        let (end_node, end_snap) = self.snap(end)?;

        let path = shortest_path(&self.graph, start_node, end_node).ok_or(Error::Unreachable)?;
        log::debug!(
            "Routed {start_node:?} -> {end_node:?}: {:.1} m over {} nodes",
            path.distance,
            path.nodes.len()
        );

        WalkingRoute::from_shortest_path(&self.graph, &path, start_snap, end_snap)
    }
}
