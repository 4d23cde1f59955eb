// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronomux_core::{ChronomuxError, Feed};
use chronomux_merge::StreamFeed;
use chronomux_test_utils::helpers::stamped_series;
use chronomux_test_utils::Stamped;
use futures::stream;

#[tokio::test]
async fn every_stream_item_becomes_an_event() {
    let mut feed = StreamFeed::new(stream::iter(stamped_series(&[1, 2])));

    assert_eq!(
        feed.advance().await.unwrap().into_event(),
        Some(Stamped::at(1, 1))
    );
    assert_eq!(
        feed.advance().await.unwrap().into_event(),
        Some(Stamped::at(2, 2))
    );
    assert!(feed.advance().await.unwrap().is_done());
}

#[tokio::test]
async fn streams_cannot_be_rewound() {
    let mut feed = StreamFeed::new(stream::iter(stamped_series(&[1])));
    let err = feed.reset().unwrap_err();
    assert!(matches!(err, ChronomuxError::ResetUnsupported { .. }));
}
