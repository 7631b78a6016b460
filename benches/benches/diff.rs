// Copyright 2025 the Daystrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use daystrip_dates::{DateEntry, DateRange};

fn window(start: DateEntry, len: u32) -> Vec<DateEntry> {
    DateRange::new(0, len - 1).build(start).unwrap()
}

fn start() -> DateEntry {
    DateEntry::from_ymd(2024, 3, 15).unwrap()
}

fn bench_sliding_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff/slide");

    // The common case: the strip moves forward by a few days.
    for len in [31_u32, 365, 3_650] {
        let old = window(start(), len);
        group.throughput(Throughput::Elements(u64::from(len)));
        for shift in [1_u64, 7] {
            let new = window(start().checked_add_days(shift).unwrap(), len);
            group.bench_with_input(
                BenchmarkId::new(format!("shift_{shift}"), len),
                &(&old, &new),
                |b, (old, new)| {
                    b.iter(|| black_box(daystrip_diff::diff(old, new)));
                },
            );
        }
    }

    group.finish();
}

fn bench_disjoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff/disjoint");

    // A jump far ahead: no common item, so no search is needed.
    for len in [31_u32, 365, 3_000] {
        let old = window(start(), len);
        let new = window(start().checked_add_days(10_000).unwrap(), len);
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_with_input(
            BenchmarkId::new("full_replace", len),
            &(&old, &new),
            |b, (old, new)| {
                b.iter(|| black_box(daystrip_diff::diff(old, new)));
            },
        );
    }

    // Worst case for the search: the windows share a single day.
    for len in [365_u32, 3_000] {
        let old = window(start(), len);
        let new = window(start().checked_add_days(u64::from(len - 1)).unwrap(), len);
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_with_input(
            BenchmarkId::new("one_common_day", len),
            &(&old, &new),
            |b, (old, new)| {
                b.iter(|| black_box(daystrip_diff::diff(old, new)));
            },
        );
    }

    group.finish();
}

fn bench_identical(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff/identical");

    for len in [365_u32, 3_650] {
        let dates = window(start(), len);
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_with_input(BenchmarkId::from_parameter(len), &dates, |b, dates| {
            b.iter(|| black_box(daystrip_diff::diff(dates, dates)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sliding_window, bench_disjoint, bench_identical);
criterion_main!(benches);
