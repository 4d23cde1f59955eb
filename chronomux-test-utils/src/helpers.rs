// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::stamped::Stamped;
use chronomux_core::{Result, Timestamped};
use futures::{pin_mut, Stream, StreamExt};

/// Drains a merged stream to a `Vec`, panicking on the first feed failure.
pub async fn collect_events<S, T>(stream: S) -> Vec<T>
where
    S: Stream<Item = Result<T>>,
{
    pin_mut!(stream);
    let mut events = Vec::new();
    while let Some(item) = stream.next().await {
        events.push(item.expect("feed failure while draining"));
    }
    events
}

/// Asserts that event times never decrease across the slice.
pub fn assert_non_decreasing<T: Timestamped>(events: &[T]) {
    for (index, pair) in events.windows(2).enumerate() {
        assert!(
            pair[0].event_time() <= pair[1].event_time(),
            "order violated at index {}: {:?} > {:?}",
            index,
            pair[0].event_time(),
            pair[1].event_time(),
        );
    }
}

/// Stamps each time onto itself, giving a feed script where value == time.
pub fn stamped_series(times: &[u64]) -> Vec<Stamped<u64>> {
    times.iter().map(|&time| Stamped::at(time, time)).collect()
}
