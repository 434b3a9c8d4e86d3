use std::collections::HashMap;
use std::convert::Infallible;

use crate::graph::{Graph, NodeId};
use crate::shortest::AllPairs;
use crate::weight::{weighting_for, Weighted};

use super::bellman_ford::relax;
use super::dijkstra::search;

/// Node of the augmented graph used to compute Johnson potentials.
///
/// The auxiliary source lives outside the identifier space of the input
/// graph, so it can never collide with a real node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum JohnsonNode {
    Real(NodeId),
    Auxiliary,
}

/// All-pairs shortest paths by Johnson's reweighting.
///
/// A Bellman-Ford pass from an auxiliary source yields node potentials that
/// make every edge weight non-negative; Dijkstra then runs from every node
/// and distances are translated back. If the graph contains a negative cycle
/// the whole computation is invalid: the flag is `false` and the returned
/// matrix holds no paths.
pub fn johnson_all_paths<G: Graph>(graph: &G) -> (AllPairs, bool) {
    let weighting = weighting_for(graph);
    let mut paths = AllPairs::unreachable(graph.nodes().collect());
    let n = paths.len();

    let mut augmented: Vec<JohnsonNode> = paths
        .nodes()
        .iter()
        .copied()
        .map(JohnsonNode::Real)
        .collect();
    augmented.push(JohnsonNode::Auxiliary);

    let index_of: HashMap<NodeId, usize> = paths
        .nodes()
        .iter()
        .enumerate()
        .map(|(index, &id)| (id, index))
        .collect();
    let adjacency: Vec<Vec<(usize, f64)>> = augmented
        .iter()
        .map(|node| match *node {
            JohnsonNode::Real(uid) => graph
                .from(uid)
                .filter_map(|vid| Some((*index_of.get(&vid)?, weighting.weight(uid, vid)?)))
                .collect(),
            JohnsonNode::Auxiliary => (0..n).map(|j| (j, 0.0)).collect(),
        })
        .collect();

    let potentials = relax(&adjacency, n, false);
    if potentials.negative_cycle {
        tracing::warn!(nodes = n, "johnson reweighting found a negative cycle");
        return (AllPairs::unreachable(paths.nodes().to_vec()), false);
    }
    let h = potentials.dist;
    let potential = |id: NodeId| index_of.get(&id).map_or(0.0, |&index| h[index]);

    // Rounding can push a reweighted edge marginally below zero.
    let reweighted = |u: NodeId, v: NodeId| -> Result<Option<f64>, Infallible> {
        Ok(weighting
            .weight(u, v)
            .map(|w| (w + potential(u) - potential(v)).max(0.0)))
    };

    for i in 0..n {
        let source = paths.node(i);
        let tree = match search(source, graph, &reweighted, true) {
            Ok(tree) => tree,
            Err(never) => match never {},
        };
        let offset = potential(source);
        paths.fill_row(i, &tree, |target, distance| {
            distance - offset + potential(target)
        });
        // Undoing the potentials rounds; restore exact edge sums.
        paths.rederive_row(i, |u, v| weighting.weight(u, v));
    }

    tracing::debug!(nodes = n, "johnson all-pairs complete");
    (paths, true)
}
