//! Result structures produced by the path engines.
//!
//! Both structures keep predecessor *sets* so that co-equal shortest paths
//! can be enumerated. Two candidate paths tie only when their accumulated
//! sums are exactly equal as `f64` values; no epsilon is applied. Sums that
//! are mathematically equal but accumulated in a different order can
//! therefore fail to tie.
//!
//! Distances use three kinds of values: a finite shortest distance,
//! `f64::INFINITY` for "no path", and `f64::NEG_INFINITY` for a node or cell
//! whose distance is corrupted by a reachable negative cycle.

use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::graph::NodeId;

/// Single-source shortest path tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestTree {
    source: NodeId,
    nodes: Vec<NodeId>,
    index_of: HashMap<NodeId, usize>,
    dist: Vec<f64>,
    predecessors: Vec<Vec<usize>>,
    has_negative_cycle: bool,
}

impl ShortestTree {
    /// Tree over `nodes` with every node unreached except `source`.
    pub(crate) fn new(source: NodeId, mut nodes: Vec<NodeId>) -> Self {
        let mut index_of: HashMap<NodeId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(index, &id)| (id, index))
            .collect();
        if !index_of.contains_key(&source) {
            index_of.insert(source, nodes.len());
            nodes.push(source);
        }

        let mut dist = vec![f64::INFINITY; nodes.len()];
        dist[index_of[&source]] = 0.0;
        let predecessors = vec![Vec::new(); nodes.len()];

        Self {
            source,
            nodes,
            index_of,
            dist,
            predecessors,
            has_negative_cycle: false,
        }
    }

    /// Tree that only knows its source; used for sources outside the graph
    /// and as the starting point of A*.
    pub(crate) fn single(source: NodeId) -> Self {
        Self::new(source, vec![source])
    }

    pub(crate) fn add(&mut self, id: NodeId) -> usize {
        if let Some(&index) = self.index_of.get(&id) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(id);
        self.index_of.insert(id, index);
        self.dist.push(f64::INFINITY);
        self.predecessors.push(Vec::new());
        index
    }

    pub(crate) fn index(&self, id: NodeId) -> Option<usize> {
        self.index_of.get(&id).copied()
    }

    pub(crate) fn node(&self, index: usize) -> NodeId {
        self.nodes[index]
    }

    pub(crate) fn dist(&self, index: usize) -> f64 {
        self.dist[index]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Record a strictly shorter distance, replacing all predecessors.
    pub(crate) fn set(&mut self, index: usize, weight: f64, from: usize) {
        self.dist[index] = weight;
        self.predecessors[index].clear();
        self.predecessors[index].push(from);
    }

    /// Record another predecessor reaching `index` at its current distance.
    pub(crate) fn add_predecessor(&mut self, index: usize, from: usize) {
        if !self.predecessors[index].contains(&from) {
            self.predecessors[index].push(from);
        }
    }

    pub(crate) fn from_parts(
        source: NodeId,
        nodes: Vec<NodeId>,
        dist: Vec<f64>,
        predecessors: Vec<Vec<usize>>,
        has_negative_cycle: bool,
    ) -> Self {
        let index_of = nodes
            .iter()
            .enumerate()
            .map(|(index, &id)| (id, index))
            .collect();
        Self {
            source,
            nodes,
            index_of,
            dist,
            predecessors,
            has_negative_cycle,
        }
    }

    /// The node the tree is rooted at.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Every node the tree knows about, reached or not.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Whether a negative cycle is reachable from the source.
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    /// Distance from the source to `id`.
    ///
    /// `+inf` when `id` is unreachable or unknown, `-inf` when the node lies
    /// on or behind a negative cycle.
    pub fn weight_to(&self, id: NodeId) -> f64 {
        self.index(id)
            .map_or(f64::INFINITY, |index| self.dist[index])
    }

    /// Immediate predecessors of `id` on shortest paths from the source.
    pub fn predecessors(&self, id: NodeId) -> Vec<NodeId> {
        self.index(id)
            .map(|index| {
                self.predecessors[index]
                    .iter()
                    .map(|&p| self.nodes[p])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// One shortest path from the source to `id` and its weight.
    ///
    /// The path is empty when the weight is infinite in either direction.
    pub fn to(&self, id: NodeId) -> (Vec<NodeId>, f64) {
        let Some(to) = self.index(id) else {
            return (Vec::new(), f64::INFINITY);
        };
        let weight = self.dist[to];
        if weight.is_infinite() {
            return (Vec::new(), weight);
        }

        let mut found = Vec::new();
        walk_back(
            self.len(),
            self.index_of[&self.source],
            to,
            |index| self.predecessors[index].as_slice(),
            |path| {
                found = self.ids(path);
                ControlFlow::Break(())
            },
        );
        (found, weight)
    }

    /// Every shortest path from the source to `id` recorded in the tree.
    pub fn all_to(&self, id: NodeId) -> (Vec<Vec<NodeId>>, f64) {
        let Some(to) = self.index(id) else {
            return (Vec::new(), f64::INFINITY);
        };
        let weight = self.dist[to];
        if weight.is_infinite() {
            return (Vec::new(), weight);
        }

        let mut paths = Vec::new();
        walk_back(
            self.len(),
            self.index_of[&self.source],
            to,
            |index| self.predecessors[index].as_slice(),
            |path| {
                paths.push(self.ids(path));
                ControlFlow::Continue(())
            },
        );
        (paths, weight)
    }

    fn ids(&self, path: &[usize]) -> Vec<NodeId> {
        path.iter().map(|&index| self.nodes[index]).collect()
    }
}

/// Dense all-pairs shortest path matrix.
///
/// Row `i` holds distances from node `i`; each cell also holds the set of
/// immediate predecessors of the column node on shortest paths from the row
/// node. Ties use exact `f64` equality, see the module documentation.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairs {
    nodes: Vec<NodeId>,
    index_of: HashMap<NodeId, usize>,
    dist: Vec<f64>,
    predecessors: Vec<Vec<usize>>,
}

impl AllPairs {
    /// Matrix where every node reaches only itself, at distance zero.
    pub(crate) fn unreachable(nodes: Vec<NodeId>) -> Self {
        let n = nodes.len();
        let index_of = nodes
            .iter()
            .enumerate()
            .map(|(index, &id)| (id, index))
            .collect();
        let mut dist = vec![f64::INFINITY; n * n];
        for i in 0..n {
            dist[i * n + i] = 0.0;
        }

        Self {
            nodes,
            index_of,
            dist,
            predecessors: vec![Vec::new(); n * n],
        }
    }

    pub(crate) fn index(&self, id: NodeId) -> Option<usize> {
        self.index_of.get(&id).copied()
    }

    pub(crate) fn node(&self, index: usize) -> NodeId {
        self.nodes[index]
    }

    pub(crate) fn at(&self, i: usize, j: usize) -> f64 {
        self.dist[i * self.len() + j]
    }

    pub(crate) fn predecessors_at(&self, i: usize, j: usize) -> &[usize] {
        &self.predecessors[i * self.len() + j]
    }

    /// Record a strictly shorter distance with the given predecessor set.
    pub(crate) fn set(&mut self, i: usize, j: usize, weight: f64, predecessors: Vec<usize>) {
        let cell = i * self.len() + j;
        self.dist[cell] = weight;
        self.predecessors[cell] = predecessors;
    }

    /// Merge predecessors reaching `(i, j)` at its current distance.
    pub(crate) fn add_predecessors(&mut self, i: usize, j: usize, extra: &[usize]) {
        let cell = i * self.len() + j;
        for &p in extra {
            if !self.predecessors[cell].contains(&p) {
                self.predecessors[cell].push(p);
            }
        }
    }

    /// Mark `(i, j)` as corrupted by a negative cycle.
    pub(crate) fn contaminate(&mut self, i: usize, j: usize) {
        self.set(i, j, f64::NEG_INFINITY, Vec::new());
    }

    /// Copy a single-source tree rooted at node `i` into row `i`, passing
    /// each finite distance through `adjust(target, distance)`.
    pub(crate) fn fill_row<F>(&mut self, i: usize, tree: &ShortestTree, adjust: F)
    where
        F: Fn(NodeId, f64) -> f64,
    {
        for (t, &id) in tree.nodes().iter().enumerate() {
            let Some(j) = self.index(id) else {
                continue;
            };
            let distance = tree.dist(t);
            if distance.is_infinite() {
                continue;
            }
            let predecessors = tree.predecessors[t]
                .iter()
                .filter_map(|&p| self.index(tree.node(p)))
                .collect();
            self.set(i, j, adjust(id, distance), predecessors);
        }
    }

    /// Recompute the finite cells of row `i` as left-to-right edge sums along
    /// the stored predecessors, `d[i][j] = d[i][p] + w(p, j)`.
    ///
    /// Engines that combine partial distances in another order (`d[i][k] +
    /// d[k][j]`, or potentials in Johnson) can land one ULP away from the sum
    /// of the path they report. Each cell is settled once all its
    /// predecessors are; only the predecessors reaching the minimum exactly
    /// are kept. Predecessor cycles, only possible through zero-weight ties,
    /// are broken by settling the closest waiting cell first.
    pub(crate) fn rederive_row<W>(&mut self, i: usize, weight: W)
    where
        W: Fn(NodeId, NodeId) -> Option<f64>,
    {
        let n = self.len();
        if self.at(i, i) != 0.0 {
            return;
        }

        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut pending = vec![0usize; n];
        let mut waiting = Vec::new();
        for j in (0..n).filter(|&j| j != i && self.at(i, j).is_finite()) {
            waiting.push(j);
            for &p in self.predecessors_at(i, j) {
                successors[p].push(j);
                pending[j] += 1;
            }
        }

        let mut derived: Vec<Option<f64>> = vec![None; n];
        let mut candidates: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        derived[i] = Some(0.0);
        let mut ready = vec![i];

        loop {
            while let Some(p) = ready.pop() {
                let Some(base) = derived[p] else {
                    continue;
                };
                for &j in &successors[p] {
                    if derived[j].is_some() {
                        continue;
                    }
                    let w = weight(self.nodes[p], self.nodes[j]).unwrap_or(f64::INFINITY);
                    candidates[j].push((p, base + w));
                    pending[j] -= 1;
                    if pending[j] == 0 {
                        derived[j] = Some(self.settle(i, j, &candidates[j]));
                        ready.push(j);
                    }
                }
            }

            let stuck = waiting
                .iter()
                .copied()
                .filter(|&j| derived[j].is_none() && !candidates[j].is_empty())
                .min_by(|&a, &b| self.at(i, a).total_cmp(&self.at(i, b)));
            let Some(j) = stuck else {
                break;
            };
            derived[j] = Some(self.settle(i, j, &candidates[j]));
            ready.push(j);
        }
    }

    fn settle(&mut self, i: usize, j: usize, candidates: &[(usize, f64)]) -> f64 {
        let best = candidates
            .iter()
            .map(|&(_, sum)| sum)
            .min_by(f64::total_cmp)
            .unwrap_or(f64::INFINITY);
        let predecessors = candidates
            .iter()
            .filter(|&&(_, sum)| sum == best)
            .map(|&(p, _)| p)
            .collect();
        self.set(i, j, best, predecessors);
        best
    }

    /// Number of nodes in the matrix.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Shortest distance from `u` to `v`.
    ///
    /// `+inf` when there is no path or either node is unknown, `-inf` when
    /// the path runs through a negative cycle.
    pub fn weight(&self, u: NodeId, v: NodeId) -> f64 {
        match (self.index(u), self.index(v)) {
            (Some(i), Some(j)) => self.at(i, j),
            _ => f64::INFINITY,
        }
    }

    /// One shortest path from `u` to `v`, its weight, and whether it is the
    /// only shortest path along its predecessor chain.
    pub fn between(&self, u: NodeId, v: NodeId) -> (Vec<NodeId>, f64, bool) {
        let (Some(i), Some(j)) = (self.index(u), self.index(v)) else {
            return (Vec::new(), f64::INFINITY, false);
        };
        let weight = self.at(i, j);
        if weight.is_infinite() {
            return (Vec::new(), weight, false);
        }

        let mut found = None;
        walk_back(
            self.len(),
            i,
            j,
            |k| self.predecessors_at(i, k),
            |path| {
                found = Some(path.to_vec());
                ControlFlow::Break(())
            },
        );

        match found {
            Some(path) => {
                let unique = path[1..]
                    .iter()
                    .all(|&k| self.predecessors_at(i, k).len() == 1);
                (self.ids(&path), weight, unique)
            }
            None => (Vec::new(), weight, false),
        }
    }

    /// Every shortest path from `u` to `v` and their common weight.
    pub fn all_between(&self, u: NodeId, v: NodeId) -> (Vec<Vec<NodeId>>, f64) {
        let (Some(i), Some(j)) = (self.index(u), self.index(v)) else {
            return (Vec::new(), f64::INFINITY);
        };
        let weight = self.at(i, j);
        if weight.is_infinite() {
            return (Vec::new(), weight);
        }

        let mut paths = Vec::new();
        walk_back(
            self.len(),
            i,
            j,
            |k| self.predecessors_at(i, k),
            |path| {
                paths.push(self.ids(path));
                ControlFlow::Continue(())
            },
        );
        (paths, weight)
    }

    fn ids(&self, path: &[usize]) -> Vec<NodeId> {
        path.iter().map(|&index| self.nodes[index]).collect()
    }
}

/// Depth-first walk over predecessor sets from `to` back to `from`.
///
/// `visit` receives each complete path in forward order. Nodes already on the
/// current path are skipped, so zero-weight cycles in the predecessor sets
/// cannot loop.
fn walk_back<'p, P, V>(n: usize, from: usize, to: usize, predecessors: P, mut visit: V)
where
    P: Fn(usize) -> &'p [usize],
    V: FnMut(&[usize]) -> ControlFlow<()>,
{
    let mut on_path = vec![false; n];
    let mut path = vec![to];
    let mut cursors = vec![0usize];
    on_path[to] = true;

    while let Some(&node) = path.last() {
        let depth = path.len() - 1;
        if node == from {
            let forward: Vec<usize> = path.iter().rev().copied().collect();
            if visit(&forward).is_break() {
                return;
            }
        } else {
            let candidates = predecessors(node);
            let mut cursor = cursors[depth];
            while cursor < candidates.len() && on_path[candidates[cursor]] {
                cursor += 1;
            }
            if cursor < candidates.len() {
                cursors[depth] = cursor + 1;
                let next = candidates[cursor];
                on_path[next] = true;
                path.push(next);
                cursors.push(0);
                continue;
            }
        }

        on_path[node] = false;
        path.pop();
        cursors.pop();
    }
}
