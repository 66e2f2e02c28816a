use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::{HashMap, hash_map::Entry};
use petgraph::graph::NodeIndex;

use super::state::State;
use crate::{Meters, model::WalkwayGraph};

/// Minimal-cost node sequence between two walkway nodes
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Sum of edge lengths along `nodes`, in meters
    pub distance: Meters,
    /// Nodes from start to target, both included
    pub nodes: Vec<NodeIndex>,
}

/// Dijkstra's algorithm between two nodes of the walkway network.
///
/// The search stops as soon as `target` is settled. A tentative cost is only
/// replaced by a strictly smaller one. Among equal-cost frontier nodes the
/// lower node index is expanded first, so on graphs with several equally
/// short paths the returned node sequence is one valid choice, not a
/// guaranteed one; the distance is always minimal.
///
/// Returns `None` when the target cannot be reached or either node is not in
/// the graph. `start == target` yields a single-node path of length 0.
pub fn shortest_path(
    graph: &WalkwayGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<ShortestPath> {
    graph.node(start)?;
    graph.node(target)?;

    let node_count = graph.node_count();
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut distances: HashMap<NodeIndex, Meters> = HashMap::with_capacity(node_count);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(node_count);
    let mut heap = BinaryHeap::with_capacity(node_count / 4 + 1);

    // Start node has distance 0
    distances.insert(start, 0.0);
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Stale heap entry, node already finalized with a smaller cost
        if settled.contains(node.index()) {
            continue;
        }
        settled.insert(node.index());

        if node == target {
            return Some(ShortestPath {
                distance: cost,
                nodes: trace_back(&predecessors, start, target),
            });
        }

        for (next, length) in graph.neighbors(node) {
            if settled.contains(next.index()) {
                continue;
            }
            let candidate = cost + length;

            match distances.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(candidate);
                    predecessors.insert(next, node);
                    heap.push(State {
                        cost: candidate,
                        node: next,
                    });
                }
                Entry::Occupied(mut entry) => {
                    if candidate < *entry.get() {
                        *entry.get_mut() = candidate;
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: candidate,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    log::trace!("Search from {start:?} exhausted without settling {target:?}");
    None
}

fn trace_back(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut nodes = vec![target];
    let mut current = target;
    while current != start {
        let Some(&prev) = predecessors.get(&current) else {
            break;
        };
        nodes.push(prev);
        current = prev;
    }
    nodes.reverse(); // Now path is from start to target
    nodes
}
