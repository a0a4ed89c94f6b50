use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use routeforge_core::prelude::*;
use routeforge_core::topology::{DESTINATION_ID, ORIGIN_ID};
use rust_decimal_macros::dec;

fn request() -> RouteRequest {
    RouteRequest::new(
        Coordinate::new(dec!(31.2304), dec!(121.4737)).unwrap(),
        Coordinate::new(dec!(39.9042), dec!(116.4074)).unwrap(),
        Weight::kilograms(dec!(2.5)),
        ServiceLevel::Standard,
    )
}

fn bench_build_graph(c: &mut Criterion) {
    let builder = NetworkBuilder::default();
    let req = request();
    c.bench_function("build_graph", |b| {
        b.iter(|| builder.build_graph(black_box(&req.origin), black_box(&req.destination)))
    });
}

fn bench_searches(c: &mut Criterion) {
    let req = request();
    let graph = NetworkBuilder::default().build_graph(&req.origin, &req.destination);

    let mut group = c.benchmark_group("search");
    group.bench_function("astar", |b| {
        b.iter(|| AStarPathFinder.find_path(black_box(&graph), ORIGIN_ID, DESTINATION_ID))
    });
    group.bench_function("dijkstra", |b| {
        b.iter(|| DijkstraPathFinder.find_path(black_box(&graph), ORIGIN_ID, DESTINATION_ID))
    });
    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let builder = Arc::new(NetworkBuilder::default());
    let balanced = BalancedStrategy::new(builder);
    let req = request();
    c.bench_function("balanced_uncached", |b| {
        b.iter(|| balanced.calculate(black_box(&req)))
    });

    let registry = StrategyRegistry::with_defaults(&EngineConfig::default()).unwrap();
    let cached = registry.create(BALANCED).unwrap();
    c.bench_function("balanced_cached", |b| b.iter(|| cached.calculate(black_box(&req))));
}

criterion_group!(benches, bench_build_graph, bench_searches, bench_strategies);
criterion_main!(benches);
