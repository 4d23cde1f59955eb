// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronomux_core::BoxedFeed;
use chronomux_merge::{FeedHandle, FrontierMerger, SortedMerger, Synchronizer};
use chronomux_test_utils::{ScriptedFeed, Stamped};
use criterion::{BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tokio::runtime::Runtime;

fn jittered_events(count: usize, seed: u64) -> Vec<Stamped<u64>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut time = 0u64;
    (0..count)
        .map(|_| {
            time += rng.u64(1..50);
            Stamped::at(time, time)
        })
        .collect()
}

fn make_feeds(feed_count: usize, events: usize) -> Vec<BoxedFeed<Stamped<u64>>> {
    (0..feed_count)
        .map(|i| {
            Box::new(ScriptedFeed::from_events(jittered_events(events, i as u64)))
                as BoxedFeed<Stamped<u64>>
        })
        .collect()
}

/// # Panics
///
/// Constructs a local `Runtime` with `Runtime::new().unwrap()`, which may
/// panic.
pub fn bench_synchronizer(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("synchronizer");
    let shapes = [(4usize, 2500usize), (64, 160), (600, 16)];

    for &(feed_count, events) in &shapes {
        let id = BenchmarkId::from_parameter(format!("f{feed_count}_e{events}"));
        group.throughput(Throughput::Elements((feed_count * events) as u64));
        group.bench_with_input(
            id,
            &(feed_count, events),
            |bencher, &(feed_count, events)| {
                bencher.iter(|| {
                    let mut sync = Synchronizer::new(make_feeds(feed_count, events));
                    rt.block_on(async {
                        while sync.advance().await.unwrap() {
                            black_box(sync.current());
                        }
                    });
                });
            },
        );
    }

    group.finish();
}

/// # Panics
///
/// Constructs a local `Runtime` with `Runtime::new().unwrap()`, which may
/// panic.
pub fn bench_merger_comparison(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("merger_comparison");
    let feed_counts = [8usize, 128, 600];
    let events = 64usize;

    for &feed_count in &feed_counts {
        group.throughput(Throughput::Elements((feed_count * events) as u64));
        group.bench_with_input(
            BenchmarkId::new("frontier", feed_count),
            &feed_count,
            |bencher, &feed_count| {
                bencher.iter(|| {
                    let handles = make_feeds(feed_count, events)
                        .into_iter()
                        .map(FeedHandle::new)
                        .collect();
                    let mut merger = FrontierMerger::new(handles);
                    rt.block_on(async {
                        while let Some(event) = merger.next_event().await.unwrap() {
                            black_box(event);
                        }
                    });
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("sorted", feed_count),
            &feed_count,
            |bencher, &feed_count| {
                bencher.iter(|| {
                    let handles = make_feeds(feed_count, events)
                        .into_iter()
                        .map(FeedHandle::new)
                        .collect();
                    let mut merger = SortedMerger::new(handles);
                    rt.block_on(async {
                        while let Some(event) = merger.next_event().await.unwrap() {
                            black_box(event);
                        }
                    });
                });
            },
        );
    }

    group.finish();
}
