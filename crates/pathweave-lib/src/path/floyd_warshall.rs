use crate::graph::Graph;
use crate::shortest::AllPairs;
use crate::weight::{weighting_for, Weighted};

/// All-pairs shortest paths by dense dynamic programming.
///
/// Negative weights are allowed. The flag is `false` when the graph contains
/// a negative cycle; every cell whose path can pass through such a cycle is
/// then `-inf` with no predecessors, while the remaining cells stay valid.
pub fn floyd_warshall<G: Graph>(graph: &G) -> (AllPairs, bool) {
    let weighting = weighting_for(graph);
    let mut paths = AllPairs::unreachable(graph.nodes().collect());
    let n = paths.len();

    for i in 0..n {
        let uid = paths.node(i);
        for vid in graph.from(uid) {
            let (Some(j), Some(w)) = (paths.index(vid), weighting.weight(uid, vid)) else {
                continue;
            };
            if i == j {
                // A self loop only matters when it undercuts the empty path.
                if w < 0.0 {
                    paths.set(i, i, w, vec![i]);
                }
                continue;
            }
            if w < paths.at(i, j) {
                paths.set(i, j, w, vec![i]);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            if i == k {
                continue;
            }
            let ik = paths.at(i, k);
            if ik == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                if j == k {
                    continue;
                }
                let joint = ik + paths.at(k, j);
                let ij = paths.at(i, j);
                if joint < ij {
                    let via = paths.predecessors_at(k, j).to_vec();
                    paths.set(i, j, joint, via);
                } else if joint == ij && i != j && joint.is_finite() {
                    let via = paths.predecessors_at(k, j).to_vec();
                    paths.add_predecessors(i, j, &via);
                }
            }
        }
    }

    let cyclic: Vec<usize> = (0..n).filter(|&k| paths.at(k, k) < 0.0).collect();
    if !cyclic.is_empty() {
        tracing::warn!(
            nodes = n,
            cyclic = cyclic.len(),
            "floyd-warshall found negative cycles"
        );
    }
    for &k in &cyclic {
        for i in 0..n {
            if paths.at(i, k) == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                if paths.at(k, j) != f64::INFINITY {
                    paths.contaminate(i, j);
                }
            }
        }
    }

    // `d[i][k] + d[k][j]` can differ from the edge sum of the stored path.
    for i in 0..n {
        paths.rederive_row(i, |u, v| weighting.weight(u, v));
    }

    tracing::debug!(nodes = n, "floyd-warshall complete");
    (paths, cyclic.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphKind, WeightedGraph};

    #[test]
    fn handles_negative_edges() {
        let graph = WeightedGraph::from_edges(
            GraphKind::Directed,
            &[(1, 3, -2.0), (3, 4, 2.0), (4, 2, -1.0), (2, 1, 4.0), (2, 3, 3.0)],
        )
        .expect("valid graph");

        let (paths, ok) = floyd_warshall(&graph);
        assert!(ok);
        assert_eq!(paths.weight(1, 2), -1.0);
        assert_eq!(paths.weight(2, 4), 4.0);
        assert_eq!(paths.weight(4, 3), 1.0);
        assert_eq!(paths.between(1, 2).0, vec![1, 3, 4, 2]);
    }

    #[test]
    fn records_tied_paths() {
        let graph = WeightedGraph::from_edges(
            GraphKind::Directed,
            &[(1, 2, 1.0), (1, 3, 1.0), (2, 4, 1.0), (3, 4, 1.0), (4, 5, 1.0)],
        )
        .expect("valid graph");

        let (paths, ok) = floyd_warshall(&graph);
        assert!(ok);
        let (all, weight) = paths.all_between(1, 5);
        assert_eq!(weight, 3.0);
        assert_eq!(all.len(), 2);
        assert!(!paths.between(1, 5).2, "two tied paths are not unique");
        assert!(paths.between(2, 5).2);
    }

    #[test]
    fn negative_cycle_contaminates_reachable_cells() {
        let graph = WeightedGraph::from_edges(
            GraphKind::Directed,
            &[(1, 2, 1.0), (2, 3, -3.0), (3, 2, 1.0), (3, 4, 1.0), (5, 1, 1.0)],
        )
        .expect("valid graph");

        let (paths, ok) = floyd_warshall(&graph);
        assert!(!ok);
        assert_eq!(paths.weight(1, 4), f64::NEG_INFINITY);
        assert_eq!(paths.weight(5, 3), f64::NEG_INFINITY);
        assert_eq!(paths.weight(5, 1), 1.0, "cells avoiding the cycle stay valid");
        assert_eq!(paths.weight(4, 1), f64::INFINITY);
        assert_eq!(paths.between(1, 4).0, Vec::<i64>::new());
    }

    #[test]
    fn cells_equal_the_edge_sum_of_their_path() {
        // Node 2 is relaxed before node 3, so the matrix first builds
        // 0.1 + (0.2 + 0.3) while the path sums as (0.1 + 0.2) + 0.3.
        let graph = WeightedGraph::from_edges(
            GraphKind::Directed,
            &[(1, 3, 0.1), (3, 2, 0.2), (2, 4, 0.3)],
        )
        .expect("valid graph");

        let (paths, ok) = floyd_warshall(&graph);
        assert!(ok);
        let (path, weight, unique) = paths.between(1, 4);
        assert_eq!(path, vec![1, 3, 2, 4]);
        assert!(unique);
        assert_eq!(weight, (0.1 + 0.2) + 0.3);
        assert_eq!(paths.weight(3, 4), 0.2 + 0.3);
    }

    #[test]
    fn diagonal_is_zero_without_negative_loops() {
        let graph = WeightedGraph::from_edges(GraphKind::Directed, &[(1, 1, 3.0), (1, 2, 1.0)])
            .expect("valid graph");

        let (paths, ok) = floyd_warshall(&graph);
        assert!(ok);
        assert_eq!(paths.weight(1, 1), 0.0);
        assert_eq!(paths.between(1, 1), (vec![1], 0.0, true));
    }
}
