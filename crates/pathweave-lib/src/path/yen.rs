use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::weight::{path_weight, weighting_for};

use super::dijkstra::{checked_weight, search};

/// A path together with its total weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath {
    pub nodes: Vec<NodeId>,
    pub weight: f64,
}

impl WeightedPath {
    /// Number of edges in the path.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Up to `k` loopless paths from `source` to `target`, ordered by
/// non-decreasing weight.
///
/// The first path is the Dijkstra shortest path. An empty list means `k` is
/// zero or `target` is unreachable.
///
/// # Errors
///
/// [`crate::Error::NegativeWeight`] when a reachable edge is negative.
pub fn yen_k_shortest_paths<G: Graph>(
    graph: &G,
    k: usize,
    source: NodeId,
    target: NodeId,
) -> Result<Vec<WeightedPath>> {
    yen_k_shortest_paths_within(graph, Some(k), f64::INFINITY, source, target)
}

/// Yen's algorithm bounded by path count and by cost.
///
/// Only paths weighing at most `slack` more than the shortest path are
/// returned. With `k == None` the cost bound alone limits the result, which
/// can enumerate every loopless path when `slack` is infinite.
pub fn yen_k_shortest_paths_within<G: Graph>(
    graph: &G,
    k: Option<usize>,
    slack: f64,
    source: NodeId,
    target: NodeId,
) -> Result<Vec<WeightedPath>> {
    if k == Some(0) {
        return Ok(Vec::new());
    }

    let weighting = weighting_for(graph);
    let weight = |u: NodeId, v: NodeId| checked_weight(&weighting, u, v);
    let mut view = SuppressedView::new(graph);

    let (nodes, shortest) = search(source, &view, &weight, false)?.to(target);
    if nodes.is_empty() {
        return Ok(Vec::new());
    }
    let limit = shortest + slack;
    let mut accepted = vec![WeightedPath {
        nodes,
        weight: shortest,
    }];
    let mut pool: Vec<WeightedPath> = Vec::new();

    while k.map_or(true, |k| accepted.len() < k) {
        let last = accepted[accepted.len() - 1].nodes.clone();

        for n in 0..last.len().saturating_sub(1) {
            view.reset();
            let spur = last[n];
            let root = &last[..=n];

            for path in &accepted {
                if path.nodes.len() > n + 1 && path.nodes[..=n] == *root {
                    view.suppress_edge(path.nodes[n], path.nodes[n + 1]);
                }
            }
            for &node in &root[..n] {
                view.suppress_node(node);
            }

            let (spur_path, spur_weight) = search(spur, &view, &weight, false)?.to(target);
            if spur_path.is_empty() {
                continue;
            }

            let mut nodes = root[..n].to_vec();
            nodes.extend(spur_path);
            let candidate = WeightedPath {
                weight: path_weight(&weighting, root) + spur_weight,
                nodes,
            };

            if candidate.weight > limit
                || accepted
                    .iter()
                    .chain(pool.iter())
                    .any(|path| path.nodes == candidate.nodes)
            {
                continue;
            }
            tracing::trace!(spur, weight = candidate.weight, "yen candidate");

            let at = pool.partition_point(|path| path.weight <= candidate.weight);
            pool.insert(at, candidate);
        }

        if pool.is_empty() {
            break;
        }
        let best = pool.remove(0);
        if best.nodes.len() <= 1 || best.weight.is_infinite() {
            break;
        }
        accepted.push(best);
    }

    tracing::debug!(
        source,
        target,
        found = accepted.len(),
        "yen k-shortest paths complete"
    );
    Ok(accepted)
}

/// Graph view with some nodes and edges hidden, rebuilt for every spur node.
struct SuppressedView<'a, G> {
    graph: &'a G,
    nodes: HashSet<NodeId>,
    edges: HashSet<(NodeId, NodeId)>,
}

impl<'a, G: Graph> SuppressedView<'a, G> {
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            nodes: HashSet::new(),
            edges: HashSet::new(),
        }
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    fn suppress_node(&mut self, id: NodeId) {
        self.nodes.insert(id);
    }

    fn suppress_edge(&mut self, u: NodeId, v: NodeId) {
        self.edges.insert((u, v));
    }

    fn allows(&self, u: NodeId, v: NodeId) -> bool {
        !self.nodes.contains(&u) && !self.nodes.contains(&v) && !self.edges.contains(&(u, v))
    }
}

impl<G: Graph> Graph for SuppressedView<'_, G> {
    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.nodes()
    }

    fn from(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph
            .from(id)
            .filter(move |&v| self.allows(id, v))
    }

    fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.allows(u, v) && self.graph.has_edge(u, v)
    }

    fn has_node(&self, id: NodeId) -> bool {
        self.graph.has_node(id)
    }
}
