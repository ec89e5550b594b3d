use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::StdRng;
use rand::SeedableRng;

use fw_apsp::prelude::*;

fn graph(n: usize) -> DenseGraph<i64> {
    RandomGraph::new(StdRng::seed_from_u64(42), 0.5, DEFAULT_WEIGHTS)
        .unwrap()
        .generate(n)
        .unwrap()
}

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("FloydWarshall_seq");
    group.sample_size(10);

    for size in [64, 128, 256, 512].iter() {
        let n = *size;
        let g = graph(n);
        group.throughput(Throughput::Elements((n * n * n) as u64));

        group.bench_with_input(BenchmarkId::new("Sequential", n), &g, |bench, g| {
            bench.iter(|| black_box(Sequential.solve(g).unwrap()));
        });
    }

    group.finish();
}

fn bench_parallel_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("FloydWarshall_par");
    group.sample_size(10);

    let n = 512;
    let g = graph(n);
    group.throughput(Throughput::Elements((n * n * n) as u64));

    for threads in [1, 2, 4, 8].iter() {
        let solver = Parallel::new(*threads).unwrap();
        group.bench_with_input(BenchmarkId::new("Parallel", threads), &g, |bench, g| {
            bench.iter(|| black_box(solver.solve(g).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sequential, bench_parallel_threads);
criterion_main!(benches);
