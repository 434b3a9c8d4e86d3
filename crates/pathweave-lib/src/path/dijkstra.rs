use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::shortest::{AllPairs, ShortestTree};
use crate::weight::{weighting_for, Weighted};

use super::queue::QueueEntry;

/// Shortest path tree from `source` for a graph with non-negative weights.
///
/// Only the first predecessor reaching each node is kept. A source that is
/// not part of the graph yields a tree containing just the source.
///
/// # Errors
///
/// [`Error::NegativeWeight`] when an edge reachable from `source` has a
/// negative weight.
pub fn dijkstra_from<G: Graph>(source: NodeId, graph: &G) -> Result<ShortestTree> {
    let weighting = weighting_for(graph);
    search(source, graph, |u, v| checked_weight(&weighting, u, v), false)
}

/// Like [`dijkstra_from`], but records every predecessor that reaches a node
/// at exactly its shortest distance.
pub fn dijkstra_all_from<G: Graph>(source: NodeId, graph: &G) -> Result<ShortestTree> {
    let weighting = weighting_for(graph);
    search(source, graph, |u, v| checked_weight(&weighting, u, v), true)
}

/// All-pairs shortest paths by running the tie-recording Dijkstra search
/// from every node.
pub fn dijkstra_all_paths<G: Graph>(graph: &G) -> Result<AllPairs> {
    let weighting = weighting_for(graph);
    let mut paths = AllPairs::unreachable(graph.nodes().collect());

    for i in 0..paths.len() {
        let source = paths.node(i);
        let tree = search(source, graph, |u, v| checked_weight(&weighting, u, v), true)?;
        paths.fill_row(i, &tree, |_, distance| distance);
    }

    tracing::debug!(nodes = paths.len(), "dijkstra all-pairs complete");
    Ok(paths)
}

/// Weight lookup that rejects negative weights.
pub(crate) fn checked_weight(
    weighting: &impl Weighted,
    u: NodeId,
    v: NodeId,
) -> Result<Option<f64>> {
    match weighting.weight(u, v) {
        Some(weight) if weight < 0.0 => Err(Error::NegativeWeight {
            from: u,
            to: v,
            weight,
        }),
        other => Ok(other),
    }
}

/// Lazy-deletion Dijkstra search shared by every engine that needs one.
///
/// `weight` may fail; Johnson's reweighted search uses an infallible error
/// type. When `ties` is set, every predecessor achieving a node's exact
/// shortest distance is kept.
pub(crate) fn search<G, W, E>(
    source: NodeId,
    graph: &G,
    weight: W,
    ties: bool,
) -> std::result::Result<ShortestTree, E>
where
    G: Graph,
    W: Fn(NodeId, NodeId) -> std::result::Result<Option<f64>, E>,
{
    if !graph.has_node(source) {
        return Ok(ShortestTree::single(source));
    }

    let mut tree = ShortestTree::new(source, graph.nodes().collect());
    let mut settled = vec![false; tree.len()];
    let mut queue = BinaryHeap::new();

    let start = tree.index(source).unwrap_or_default();
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let u = entry.node;
        if settled[u] || entry.cost.0 > tree.dist(u) {
            continue;
        }
        settled[u] = true;

        let uid = tree.node(u);
        let base = tree.dist(u);
        for vid in graph.from(uid) {
            let Some(w) = weight(uid, vid)? else {
                continue;
            };
            let Some(v) = tree.index(vid) else {
                continue;
            };

            let joint = base + w;
            if joint < tree.dist(v) {
                tree.set(v, joint, u);
                queue.push(QueueEntry::new(v, joint));
            } else if ties && v != u && joint == tree.dist(v) {
                tree.add_predecessor(v, u);
            }
        }
    }

    tracing::trace!(
        source,
        settled = settled.iter().filter(|s| **s).count(),
        "dijkstra search complete"
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphKind, WeightedGraph};

    fn sample() -> WeightedGraph {
        WeightedGraph::from_edges(
            GraphKind::Directed,
            &[
                (1, 2, 7.0),
                (1, 3, 9.0),
                (1, 6, 14.0),
                (2, 3, 10.0),
                (2, 4, 15.0),
                (3, 4, 11.0),
                (3, 6, 2.0),
                (4, 5, 6.0),
                (6, 5, 9.0),
            ],
        )
        .expect("valid graph")
    }

    #[test]
    fn finds_lowest_cost_route() {
        let tree = dijkstra_from(1, &sample()).expect("non-negative graph");

        assert_eq!(tree.to(5), (vec![1, 3, 6, 5], 20.0));
        assert_eq!(tree.weight_to(4), 20.0);
        assert_eq!(tree.source(), 1);
    }

    #[test]
    fn unreachable_nodes_stay_infinite() {
        let mut graph = sample();
        graph.add_node(42);
        let tree = dijkstra_from(1, &graph).expect("non-negative graph");

        assert_eq!(tree.to(42), (Vec::new(), f64::INFINITY));
    }

    #[test]
    fn source_outside_graph_reaches_only_itself() {
        let tree = dijkstra_from(99, &sample()).expect("non-negative graph");
        assert_eq!(tree.to(99), (vec![99], 0.0));
        assert_eq!(tree.weight_to(1), f64::INFINITY);
    }

    #[test]
    fn reachable_negative_edge_fails_fast() {
        let mut graph = sample();
        graph.set_edge(6, 7, -1.0).expect("valid edge");

        let err = dijkstra_from(1, &graph).unwrap_err();
        assert!(matches!(err, Error::NegativeWeight { from: 6, to: 7, .. }));
    }

    #[test]
    fn unreachable_negative_edge_is_ignored() {
        let mut graph = sample();
        graph.set_edge(8, 1, -3.0).expect("valid edge");

        assert!(dijkstra_from(1, &graph).is_ok());
    }

    #[test]
    fn tie_recording_keeps_both_branches() {
        let graph = WeightedGraph::from_edges(
            GraphKind::Directed,
            &[(1, 2, 1.0), (1, 3, 2.0), (2, 4, 2.0), (3, 4, 1.0)],
        )
        .expect("valid graph");

        let single = dijkstra_from(1, &graph).expect("non-negative graph");
        assert_eq!(single.predecessors(4).len(), 1);

        let all = dijkstra_all_from(1, &graph).expect("non-negative graph");
        let (paths, weight) = all.all_to(4);
        assert_eq!(weight, 3.0);
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn unweighted_graph_counts_hops() {
        let graph = sample();
        let tree = dijkstra_from(1, &graph.unweighted()).expect("uniform cost");
        assert_eq!(tree.weight_to(5), 2.0);
    }

    #[test]
    fn all_paths_fills_every_row() {
        let paths = dijkstra_all_paths(&sample()).expect("non-negative graph");

        assert_eq!(paths.weight(1, 5), 20.0);
        assert_eq!(paths.weight(3, 5), 11.0);
        assert_eq!(paths.weight(5, 1), f64::INFINITY);
        assert_eq!(paths.weight(4, 4), 0.0);
        assert_eq!(paths.between(1, 5).0, vec![1, 3, 6, 5]);
    }
}
