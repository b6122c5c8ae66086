//! Store mutation cost with live views attached.
//!
//! Measures how insert/delete scale with the number of registered views,
//! and the cost of building each projection from scratch.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use viewstore::{AscendingView, CrossView, PrimeView, Store};

const SIZES: [i32; 3] = [100, 1000, 10000];
const VIEW_COUNTS: [usize; 4] = [0, 1, 8, 64];

fn populated_store(size: i32) -> Store {
    let mut store = Store::new();
    for value in 0..size {
        // Even values only, so odd values can be inserted during the benchmark.
        let _ = store.insert(value * 2);
    }
    store
}

fn benchmark_insert_with_live_views(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert_with_live_views");

    for views in VIEW_COUNTS {
        group.bench_with_input(BenchmarkId::new("ascending", views), &views, |bencher, &views| {
            bencher.iter_batched(
                || {
                    let store = populated_store(1000);
                    let live: Vec<AscendingView> =
                        (0..views).map(|_| AscendingView::new(&store)).collect();
                    (store, live)
                },
                |(mut store, live)| {
                    store.insert(black_box(1001)).ok();
                    black_box(live)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("cross", views), &views, |bencher, &views| {
            bencher.iter_batched(
                || {
                    let store = populated_store(1000);
                    let live: Vec<CrossView> =
                        (0..views).map(|_| CrossView::new(&store)).collect();
                    (store, live)
                },
                |(mut store, live)| {
                    store.insert(black_box(1001)).ok();
                    black_box(live)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_projection_build(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("projection_build");

    for size in SIZES {
        let store = populated_store(size);
        group.bench_with_input(BenchmarkId::new("ascending", size), &store, |bencher, store| {
            bencher.iter(|| black_box(AscendingView::new(store)));
        });
        group.bench_with_input(BenchmarkId::new("cross", size), &store, |bencher, store| {
            bencher.iter(|| black_box(CrossView::new(store)));
        });
        group.bench_with_input(BenchmarkId::new("prime", size), &store, |bencher, store| {
            bencher.iter(|| black_box(PrimeView::new(store)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert_with_live_views,
    benchmark_projection_build
);
criterion_main!(benches);
