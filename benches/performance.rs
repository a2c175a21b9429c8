use criterion::{criterion_group, criterion_main, Criterion};
use vseq::prelude::*;

fn bench_shuffle_take(c: &mut Criterion) {
    let n = 100_000;
    let source: Vec<i32> = (0..n).collect();

    for m in [10usize, 1_000, 100_000] {
        c.bench_function(&format!("shuffle_take_n{}_m{}", n, m), |b| {
            b.iter(|| {
                let mut taken = 0;
                let mut chain = from_slice(&source).shuffle_seeded(42).take(m);
                while chain.try_next().is_some() {
                    taken += 1;
                }
                taken
            })
        });
    }
}

fn bench_filter_map_pipeline(c: &mut Criterion) {
    let source: Vec<i64> = (0..100_000).collect();

    c.bench_function("filter_map_to_vec", |b| {
        b.iter(|| {
            from_slice(&source)
                .filter(|x| x % 3 == 0)
                .map(|x| x * 2)
                .to_vec()
        })
    });

    c.bench_function("window_count", |b| {
        b.iter(|| from_slice(&source).skip(1_000).take(50_000).count())
    });
}

criterion_group!(sequences, bench_shuffle_take, bench_filter_map_pipeline);
criterion_main!(sequences);
