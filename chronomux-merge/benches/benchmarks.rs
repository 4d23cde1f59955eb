// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod merge_bench;

use criterion::{criterion_group, criterion_main};
use merge_bench::{bench_merger_comparison, bench_synchronizer};

criterion_group!(merge_benches, bench_synchronizer, bench_merger_comparison);
criterion_main!(merge_benches);
