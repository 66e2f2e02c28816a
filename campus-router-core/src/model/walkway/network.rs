use geo::LineString;
use hashbrown::HashMap;
use petgraph::{
    graph::{NodeIndex, UnGraph},
    unionfind::UnionFind,
    visit::EdgeRef,
};

use super::components::{WalkwayEdge, WalkwayNode};
use crate::{
    Meters,
    geometry::great_circle_distance,
    model::{GeoPoint, NodeKey},
};

/// Undirected walkway graph built from path line geometry.
///
/// Nodes are deduplicated by [`NodeKey`], so coordinates that round to the
/// same key collapse into one node no matter which feature they came from.
/// The graph is never mutated after construction; a data reload builds a
/// new one.
#[derive(Debug, Clone, Default)]
pub struct WalkwayGraph {
    pub(crate) graph: UnGraph<WalkwayNode, WalkwayEdge>,
    index: HashMap<NodeKey, NodeIndex>,
}

impl WalkwayGraph {
    /// Builds a graph from line features whose coordinates are
    /// `(x = longitude, y = latitude)`.
    ///
    /// Every pair of consecutive coordinates becomes an edge weighted by the
    /// great-circle distance between the raw (unrounded) coordinates. Lines
    /// with fewer than two coordinates add nothing. Adding a segment between
    /// two nodes that are already connected replaces the previous weight.
    ///
    /// Repeated consecutive coordinates are kept as zero-length self-loops;
    /// they never shorten a path.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a LineString<f64>>,
    {
        let mut walkways = Self::default();
        for line in lines {
            for segment in line.lines() {
                walkways.add_segment(segment.start.into(), segment.end.into());
            }
        }
        walkways
    }

    fn add_node(&mut self, point: GeoPoint) -> NodeIndex {
        let key = point.key();
        *self.index.entry(key).or_insert_with(|| {
            self.graph.add_node(WalkwayNode {
                key,
                geometry: point,
            })
        })
    }

    fn add_segment(&mut self, from: GeoPoint, to: GeoPoint) {
        let a = self.add_node(from);
        let b = self.add_node(to);
        let length = great_circle_distance(from, to);
        self.graph.update_edge(a, b, WalkwayEdge { length });
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node_index(&self, key: NodeKey) -> Option<NodeIndex> {
        self.index.get(&key).copied()
    }

    pub fn node(&self, node: NodeIndex) -> Option<&WalkwayNode> {
        self.graph.node_weight(node)
    }

    pub fn point(&self, node: NodeIndex) -> Option<GeoPoint> {
        self.node(node).map(|n| n.geometry)
    }

    /// Weight of the edge between two nodes, in either direction
    pub fn edge_weight(&self, a: NodeIndex, b: NodeIndex) -> Option<Meters> {
        self.graph
            .find_edge(a, b)
            .and_then(|edge| self.graph.edge_weight(edge))
            .map(WalkwayEdge::length)
    }

    /// Adjacent nodes with the length of the connecting edge
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, Meters)> + '_ {
        self.graph.edges(node).map(move |edge| {
            let other = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            (other, edge.weight().length)
        })
    }

    pub fn node_points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.graph.node_weights().map(|n| n.geometry)
    }

    /// Connected-component label of every node, indexed by
    /// `NodeIndex::index()`. Nodes share a label exactly when a path joins them.
    pub fn component_labels(&self) -> Vec<usize> {
        let mut components = UnionFind::new(self.graph.node_count());
        for edge in self.graph.edge_references() {
            components.union(edge.source().index(), edge.target().index());
        }
        components.into_labeling()
    }

    /// Finds the node closest to `point` by great-circle distance.
    ///
    /// Scans every node, so it works for any metric but costs O(V). On exact
    /// ties the first node in insertion order wins. There is no distance
    /// cutoff; callers that must reject far-away points check the campus
    /// boundary first. Returns `None` only for an empty graph.
    pub fn nearest_node(&self, point: GeoPoint) -> Option<(NodeIndex, Meters)> {
        let mut best: Option<(NodeIndex, Meters)> = None;
        for node in self.graph.node_indices() {
            let distance = great_circle_distance(point, self.graph[node].geometry);
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((node, distance));
            }
        }
        best
    }
}
