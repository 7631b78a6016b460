// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use daystrip_selection::{SelectionFlags, SelectionPolicy, SelectionTracker};

fn multi() -> SelectionTracker {
    SelectionTracker::new(SelectionPolicy::new(
        SelectionFlags::MULTI_SELECTION | SelectionFlags::DESELECTION,
    ))
}

fn bench_select_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/set_items_selected");

    // Keys live in a Vec, so membership checks are linear in the selection size.
    for len in [31_usize, 365, 2_048] {
        let keys: Vec<usize> = (0..len).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &keys, |b, keys| {
            b.iter_batched(
                multi,
                |mut tracker| {
                    black_box(tracker.set_items_selected(keys.iter().copied(), true));
                    black_box(tracker);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_retain_below(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/retain_below");

    for len in [365_usize, 2_048] {
        let mut full = multi();
        full.set_items_selected(0..len, true);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &full, |b, full| {
            b.iter_batched(
                || full.clone(),
                |mut tracker| {
                    black_box(tracker.retain_below(len / 2));
                    black_box(tracker);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_tap_toggle(c: &mut Criterion) {
    c.bench_function("selection/tap_toggle_single", |b| {
        let mut tracker = SelectionTracker::new(SelectionPolicy::default());
        let mut key = 0_usize;
        b.iter(|| {
            key = (key + 1) % 31;
            black_box(tracker.on_tap(black_box(key)));
        });
    });
}

criterion_group!(benches, bench_select_batch, bench_retain_below, bench_tap_toggle);
criterion_main!(benches);
