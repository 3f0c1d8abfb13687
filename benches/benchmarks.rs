//! Criterion benchmarks for wgraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use wgraph::graph::Graph;
use wgraph::types::Node;

/// Build a random undirected graph with `edges_per_node` links per node.
fn make_large_graph(node_count: usize, edges_per_node: usize) -> Graph {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();

    for i in 0..node_count {
        graph.get_or_create_node(&format!("node_{}", i));
    }
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            graph.connect_undirected(
                &format!("node_{}", i),
                &format!("node_{}", target),
                rng.gen_range(1..100),
            );
        }
    }

    graph
}

fn bench_get_or_create_node(c: &mut Criterion) {
    let mut graph = make_large_graph(10_000, 3);

    c.bench_function("get_or_create_node_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let id = rng.gen_range(0..20_000);
            graph.get_or_create_node(&format!("node_{}", id))
        })
    });
}

fn bench_connect(c: &mut Criterion) {
    let mut graph = make_large_graph(10_000, 3);

    c.bench_function("connect_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let src = rng.gen_range(0..10_000);
            let tgt = rng.gen_range(0..10_000);
            graph.connect(
                &format!("node_{}", src),
                &format!("node_{}", tgt),
                rng.gen_range(1..100),
            );
        })
    });
}

fn bench_bfs(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);

    c.bench_function("bfs_100k", |b| {
        b.iter(|| {
            let mut count = 0usize;
            let _ = graph.bfs("node_50000", |_: &Node| count += 1);
            count
        })
    });
}

fn bench_dfs(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);

    c.bench_function("dfs_100k", |b| {
        b.iter(|| graph.dfs_order("node_50000").map(|order| order.len()))
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);

    c.bench_function("dijkstra_100k", |b| {
        b.iter(|| graph.dijkstra("node_0").map(|paths| paths.len()))
    });
}

fn bench_prim_jarnik(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);

    c.bench_function("prim_jarnik_100k", |b| {
        b.iter(|| graph.minimum_spanning_forest().total_weight())
    });
}

criterion_group!(
    benches,
    bench_get_or_create_node,
    bench_connect,
    bench_bfs,
    bench_dfs,
    bench_dijkstra,
    bench_prim_jarnik,
);
criterion_main!(benches);
