//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqwrap::{Seed, Wrap};

fn benchmark_pipeline(c: &mut Criterion) {
    c.bench_function("filter_map_take_10000", |b| {
        b.iter(|| {
            let out = Wrap::naturals::<u64>()
                .filter(|n, _| n % 3 == 0)
                .map(|n| n * 2)
                .take(black_box(10_000))
                .to_vec();
            black_box(out);
        });
    });

    c.bench_function("range_reduce_f64", |b| {
        b.iter(|| {
            let total = Wrap::range(0.0, black_box(10_000.0), 0.5)
                .reduce(|acc, v, _| acc + v, Seed::Unseeded);
            black_box(total)
        });
    });

    c.bench_function("zip_join", |b| {
        let left: Vec<u32> = (0..1_000).collect();
        b.iter(|| {
            let text = Wrap::zip((&left, Wrap::cycle(["a", "b", "c"])))
                .map(|(n, s)| format!("{n}{s}"))
                .join(",");
            black_box(text)
        });
    });
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
