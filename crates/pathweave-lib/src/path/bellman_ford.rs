use std::collections::VecDeque;

use crate::graph::{Graph, NodeId};
use crate::shortest::ShortestTree;
use crate::weight::{weighting_for, Weighted};

/// Shortest path tree from `source` for a graph that may contain negative
/// edge weights.
///
/// The returned flag is `false` exactly when a negative cycle is reachable
/// from `source`. In that case every node on or behind such a cycle has
/// distance `-inf` and no path; other distances remain valid.
pub fn bellman_ford_from<G: Graph>(source: NodeId, graph: &G) -> (ShortestTree, bool) {
    run(source, graph, false)
}

/// Like [`bellman_ford_from`], but records every predecessor that reaches a
/// node at exactly its shortest distance.
pub fn bellman_ford_all_from<G: Graph>(source: NodeId, graph: &G) -> (ShortestTree, bool) {
    run(source, graph, true)
}

fn run<G: Graph>(source: NodeId, graph: &G, ties: bool) -> (ShortestTree, bool) {
    if !graph.has_node(source) {
        return (ShortestTree::single(source), true);
    }

    let nodes: Vec<NodeId> = graph.nodes().collect();
    let probe = ShortestTree::new(source, nodes);
    let weighting = weighting_for(graph);
    let adjacency: Vec<Vec<(usize, f64)>> = probe
        .nodes()
        .iter()
        .map(|&uid| {
            graph
                .from(uid)
                .filter_map(|vid| Some((probe.index(vid)?, weighting.weight(uid, vid)?)))
                .collect()
        })
        .collect();

    let start = probe.index(source).unwrap_or_default();
    let relaxed = relax(&adjacency, start, ties);
    let ok = !relaxed.negative_cycle;
    if !ok {
        tracing::warn!(source, "negative cycle reachable from source");
    }

    let tree = ShortestTree::from_parts(
        source,
        probe.nodes().to_vec(),
        relaxed.dist,
        relaxed.predecessors,
        relaxed.negative_cycle,
    );
    (tree, ok)
}

/// Outcome of a queue-based relaxation over an index graph.
pub(crate) struct Relaxed {
    pub(crate) dist: Vec<f64>,
    pub(crate) predecessors: Vec<Vec<usize>>,
    pub(crate) negative_cycle: bool,
}

/// Queue-based Bellman-Ford relaxation from `start`.
///
/// Nodes whose distance changed wait in a FIFO queue and are never queued
/// twice at once. Without a reachable negative cycle the queue drains within
/// `1 + n·(n−1)` dequeues: at most `n` per Bellman-Ford pass, `n−1` passes,
/// plus the start node. Exceeding that bound means a negative cycle; every
/// node on or behind it is then set to `-inf`.
pub(crate) fn relax(adjacency: &[Vec<(usize, f64)>], start: usize, ties: bool) -> Relaxed {
    let n = adjacency.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut queued = vec![false; n];
    let mut queue = VecDeque::with_capacity(n);

    dist[start] = 0.0;
    queue.push_back(start);
    queued[start] = true;

    let limit = n.saturating_mul(n.saturating_sub(1)).saturating_add(1);
    let mut dequeues = 0usize;
    let mut negative_cycle = false;

    while let Some(u) = queue.pop_front() {
        queued[u] = false;
        dequeues += 1;
        if dequeues > limit {
            negative_cycle = true;
            break;
        }

        for &(v, w) in &adjacency[u] {
            let joint = dist[u] + w;
            if joint < dist[v] {
                dist[v] = joint;
                predecessors[v].clear();
                predecessors[v].push(u);
                if !queued[v] {
                    queue.push_back(v);
                    queued[v] = true;
                }
            } else if ties && v != u && joint == dist[v] && !predecessors[v].contains(&u) {
                predecessors[v].push(u);
            }
        }
    }

    if negative_cycle {
        mark_cycle_reachable(adjacency, &mut dist, &mut predecessors);
    }

    Relaxed {
        dist,
        predecessors,
        negative_cycle,
    }
}

/// Set every node on or downstream of a negative cycle to `-inf`.
///
/// Each negative cycle keeps at least one edge that still relaxes, since the
/// slack around the cycle sums to its negative weight. Those edges seed a
/// traversal over everything reachable from them.
fn mark_cycle_reachable(
    adjacency: &[Vec<(usize, f64)>],
    dist: &mut [f64],
    predecessors: &mut [Vec<usize>],
) {
    let mut marked = vec![false; adjacency.len()];
    let mut stack = Vec::new();

    for (u, edges) in adjacency.iter().enumerate() {
        if dist[u] == f64::INFINITY {
            continue;
        }
        for &(v, w) in edges {
            if dist[u] + w < dist[v] && !marked[v] {
                marked[v] = true;
                stack.push(v);
            }
        }
    }

    while let Some(u) = stack.pop() {
        for &(v, _) in &adjacency[u] {
            if !marked[v] {
                marked[v] = true;
                stack.push(v);
            }
        }
    }

    for (v, is_marked) in marked.into_iter().enumerate() {
        if is_marked {
            dist[v] = f64::NEG_INFINITY;
            predecessors[v].clear();
        }
    }
}
