use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use pathweave_lib::{
    a_star, bellman_ford_from, dijkstra_from, floyd_warshall, johnson_all_paths,
    yen_k_shortest_paths, GraphKind, NodeId, WeightedGraph,
};
use std::hint::black_box;

const SIDE: NodeId = 24;

/// Undirected grid with weights that vary by position so paths are not all
/// tied.
fn build_grid(side: NodeId) -> WeightedGraph {
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            let weight = 1.0 + ((row * 7 + col * 13) % 5) as f64;
            if col + 1 < side {
                edges.push((id, id + 1, weight));
            }
            if row + 1 < side {
                edges.push((id, id + side, weight));
            }
        }
    }
    WeightedGraph::from_edges(GraphKind::Undirected, &edges).expect("valid grid")
}

fn manhattan(from: NodeId, to: NodeId) -> f64 {
    ((from / SIDE - to / SIDE).abs() + (from % SIDE - to % SIDE).abs()) as f64
}

static GRID: Lazy<WeightedGraph> = Lazy::new(|| build_grid(SIDE));
static SMALL_GRID: Lazy<WeightedGraph> = Lazy::new(|| build_grid(10));

fn benchmark_pathfinding(c: &mut Criterion) {
    let grid = &*GRID;
    let goal = SIDE * SIDE - 1;

    c.bench_function("dijkstra_grid_corner", |b| {
        b.iter(|| {
            let tree = dijkstra_from(black_box(0), grid).expect("non-negative grid");
            black_box(tree.weight_to(goal))
        });
    });

    c.bench_function("bellman_ford_grid_corner", |b| {
        b.iter(|| {
            let (tree, ok) = bellman_ford_from(black_box(0), grid);
            black_box((tree.weight_to(goal), ok))
        });
    });

    c.bench_function("astar_manhattan_grid_corner", |b| {
        b.iter(|| {
            let result = a_star(black_box(0), goal, grid, Some(&manhattan)).expect("non-negative grid");
            black_box(result.expanded)
        });
    });

    c.bench_function("yen_k5_grid_corner", |b| {
        b.iter(|| {
            let paths = yen_k_shortest_paths(grid, 5, black_box(0), goal).expect("non-negative grid");
            black_box(paths.len())
        });
    });

    let small = &*SMALL_GRID;

    c.bench_function("floyd_warshall_small_grid", |b| {
        b.iter(|| {
            let (paths, ok) = floyd_warshall(black_box(small));
            black_box((paths.len(), ok))
        });
    });

    c.bench_function("johnson_small_grid", |b| {
        b.iter(|| {
            let (paths, ok) = johnson_all_paths(black_box(small));
            black_box((paths.len(), ok))
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
