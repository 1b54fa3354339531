//! Benchmarks for graph traversal.
//!
//! Measures the traversal iterators on two shapes:
//! - A 40 x 40 torus (regular, degree 4)
//! - A seeded Erdős–Rényi graph with 400 nodes
//!
//! Depth-first search is measured under both queuing policies.

extern crate loopless;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use loopless::{
    Breadthwise, BreadthFirstSearch, DepthFirstPolicy, DepthFirstSearch, RandomGraphConfig,
    Topology, UndirectedGraph,
};
use std::hint::black_box;

fn create_torus() -> UndirectedGraph<usize> {
    let nodes: Vec<usize> = (1..=1600).collect();
    UndirectedGraph::generate(Topology::Torus { m: 40, n: 40 }, &nodes).unwrap()
}

fn create_random() -> UndirectedGraph<usize> {
    let config = RandomGraphConfig::sparse().with_seed(0x5eed);
    UndirectedGraph::random_with(1..=400, &config).unwrap()
}

/// Benchmark breadth-first search with sorted and adjacency-order ties.
fn bench_breadth_first(c: &mut Criterion) {
    let torus = create_torus();
    let random = create_random();

    let mut group = c.benchmark_group("bfs");
    group.throughput(Throughput::Elements(torus.order() as u64));
    group.bench_function("torus_ordered", |b| {
        b.iter(|| BreadthFirstSearch::new(black_box(&torus), 1).count());
    });
    group.bench_function("torus_unordered", |b| {
        b.iter(|| BreadthFirstSearch::unordered(black_box(&torus), 1).count());
    });
    group.bench_function("random_ordered", |b| {
        b.iter(|| BreadthFirstSearch::new(black_box(&random), 1).count());
    });
    group.finish();
}

/// Benchmark depth-first search under both queuing policies.
fn bench_depth_first(c: &mut Criterion) {
    let torus = create_torus();
    let random = create_random();

    let mut group = c.benchmark_group("dfs");
    for policy in [
        DepthFirstPolicy::QueueAllUnvisited,
        DepthFirstPolicy::QueueOnlyUnqueued,
    ] {
        group.bench_function(format!("torus_{policy:?}"), |b| {
            b.iter(|| {
                DepthFirstSearch::new(black_box(&torus), 1)
                    .with_policy(policy)
                    .count()
            });
        });
        group.bench_function(format!("random_{policy:?}"), |b| {
            b.iter(|| {
                DepthFirstSearch::new(black_box(&random), 1)
                    .with_policy(policy)
                    .count()
            });
        });
    }
    group.finish();
}

/// Benchmark layer expansion and distance queries.
fn bench_breadthwise(c: &mut Criterion) {
    let torus = create_torus();

    c.bench_function("breadthwise_torus_layers", |b| {
        b.iter(|| Breadthwise::new(black_box(&torus), 1).count());
    });
    c.bench_function("distance_torus_antipode", |b| {
        b.iter(|| black_box(&torus).distance(&1, black_box(&821)));
    });
}

criterion_group!(
    benches,
    bench_breadth_first,
    bench_depth_first,
    bench_breadthwise
);
criterion_main!(benches);
