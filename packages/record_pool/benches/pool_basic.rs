//! Basic benchmarks for the `record_pool` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use criterion::{Criterion, criterion_group, criterion_main};
use new_zealand::nz;
use record_pool::{OomPolicy, RecordPool};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestRecord = [u64; 4];

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_basic");

    group.bench_function("build_default", |b| {
        b.iter(|| drop(black_box(RecordPool::<TestRecord>::builder().build().unwrap())));
    });

    group.bench_function("acquire_first", |b| {
        b.iter_custom(|iters| {
            let mut pools =
                iter::repeat_with(|| RecordPool::<TestRecord>::builder().build().unwrap())
                    .take(usize::try_from(iters).unwrap())
                    .collect::<Vec<_>>();

            let start = Instant::now();

            for pool in &mut pools {
                _ = black_box(pool.acquire());
            }

            start.elapsed()
        });
    });

    group.bench_function("acquire_release_hot", |b| {
        b.iter_custom(|iters| {
            let mut pool = RecordPool::<TestRecord>::builder().build().unwrap();

            let start = Instant::now();

            for _ in 0..iters {
                let handle = pool.acquire().expect("the default policy grows on demand");
                _ = black_box(pool.get_mut(handle));
                pool.release(handle);
            }

            start.elapsed()
        });
    });

    // The allocate-per-use pattern the pool replaces, for comparison.
    group.bench_function("boxed_baseline", |b| {
        b.iter(|| {
            let boxed = Box::new(black_box(TestRecord::default()));
            drop(black_box(boxed));
        });
    });

    group.finish();

    let mut group = c.benchmark_group("pool_churn");

    group.bench_function("churn_pool_100", |b| {
        b.iter_custom(|iters| {
            let mut pool = RecordPool::<TestRecord>::builder()
                .initial_capacity(nz!(100))
                .oom_policy(OomPolicy::None)
                .build()
                .unwrap();

            let mut handles = Vec::with_capacity(100);

            let start = Instant::now();

            for _ in 0..iters {
                for _ in 0..100 {
                    handles.push(pool.acquire().expect("the pool was sized for this batch"));
                }

                #[expect(clippy::iter_with_drain, reason = "to avoid moving the value")]
                for handle in handles.drain(..) {
                    pool.release(handle);
                }
            }

            start.elapsed()
        });
    });

    group.bench_function("churn_boxed_100", |b| {
        b.iter_custom(|iters| {
            let mut boxes = Vec::with_capacity(100);

            let start = Instant::now();

            for _ in 0..iters {
                for _ in 0..100 {
                    boxes.push(Box::new(black_box(TestRecord::default())));
                }

                boxes.clear();
            }

            start.elapsed()
        });
    });

    group.finish();
}
