use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::shortest::ShortestTree;
use crate::weight::{weighting_for, Heuristic, NullHeuristic};

use super::dijkstra::checked_weight;
use super::queue::AStarEntry;

/// Outcome of an A* search.
#[derive(Debug, Clone, PartialEq)]
pub struct AStarResult {
    /// Partial shortest path tree covering the nodes the search discovered.
    pub tree: ShortestTree,
    /// Number of nodes popped from the open set and expanded, the target
    /// included.
    pub expanded: usize,
}

impl AStarResult {
    /// Path to `target` and its weight, see [`ShortestTree::to`].
    pub fn to(&self, target: NodeId) -> (Vec<NodeId>, f64) {
        self.tree.to(target)
    }
}

/// A* search from `source` to `target`.
///
/// The heuristic is resolved in order: the `heuristic` argument, the graph's
/// own [`Graph::heuristic_coster`], then [`NullHeuristic`]. The search stops
/// when the target is popped from the open set, not when it is first
/// discovered.
///
/// Expanded nodes are closed and never reopened, so the returned path is
/// guaranteed shortest only for a consistent heuristic
/// (`h(u) <= w(u, v) + h(v)` on every edge). An admissible but inconsistent
/// heuristic can close a node before its best distance is known and return a
/// longer path.
///
/// # Errors
///
/// [`crate::Error::NegativeWeight`] when the search meets a negative edge,
/// whatever the heuristic.
pub fn a_star<G: Graph>(
    source: NodeId,
    target: NodeId,
    graph: &G,
    heuristic: Option<&dyn Heuristic>,
) -> Result<AStarResult> {
    let mut tree = ShortestTree::single(source);
    if !graph.has_node(source) {
        return Ok(AStarResult { tree, expanded: 0 });
    }

    let h: &dyn Heuristic = match heuristic {
        Some(h) => h,
        None => graph.heuristic_coster().unwrap_or(&NullHeuristic),
    };
    let weighting = weighting_for(graph);

    let mut closed = vec![false];
    let mut open = BinaryHeap::new();
    open.push(AStarEntry::new(0, 0.0, h.estimate(source, target)));
    let mut expanded = 0usize;

    while let Some(entry) = open.pop() {
        let u = entry.node;
        if closed[u] || entry.cost.0 > tree.dist(u) {
            continue;
        }
        expanded += 1;

        let uid = tree.node(u);
        if uid == target {
            break;
        }
        closed[u] = true;

        let base = tree.dist(u);
        for vid in graph.from(uid) {
            let Some(w) = checked_weight(&weighting, uid, vid)? else {
                continue;
            };

            let v = match tree.index(vid) {
                Some(v) => v,
                None => {
                    closed.push(false);
                    tree.add(vid)
                }
            };
            if closed[v] {
                continue;
            }

            let tentative = base + w;
            if tentative < tree.dist(v) {
                tree.set(v, tentative, u);
                open.push(AStarEntry::new(v, tentative, h.estimate(vid, target)));
            }
        }
    }

    tracing::debug!(source, target, expanded, "a* search complete");
    Ok(AStarResult { tree, expanded })
}
