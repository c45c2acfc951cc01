//! Criterion benchmarks for the per-tick path.
//! Focus sizes: star counts in {10, 50, 100}.
//! Results: by default under target/criterion.

use astaroids::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");
    for &n in &[10usize, 50, 100] {
        let cfg = FieldCfg {
            star_count: n,
            ..FieldCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("step", n), &cfg, |b, &cfg| {
            b.iter_batched(
                || Field::seeded(cfg, 43).unwrap(),
                |mut field| {
                    let _outcome = field.step().unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("place", n), &cfg, |b, &cfg| {
            b.iter(|| Field::seeded(cfg, 44).unwrap())
        });
    }
    group.finish();
}

fn bench_intersects(c: &mut Criterion) {
    let base = base_outline();
    let a = base.transform(&Matrix::translation(0.5, 0.5, 0.0)).unwrap();
    let crossing = base.transform(&Matrix::translation(0.6, 0.5, 0.0)).unwrap();
    let apart = base.transform(&Matrix::translation(5.0, 5.0, 0.0)).unwrap();
    let mut group = c.benchmark_group("polygon");
    group.bench_function("intersects_hit", |b| b.iter(|| a.intersects(&crossing)));
    group.bench_function("intersects_miss", |b| b.iter(|| a.intersects(&apart)));
    group.finish();
}

criterion_group!(benches, bench_field, bench_intersects);
criterion_main!(benches);
