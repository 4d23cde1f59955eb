// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use chronomux_core::{Feed, FeedStep, Result};
use futures::{Stream, StreamExt};

/// Adapts any `futures::Stream` into a [`Feed`].
///
/// Streams have no notion of a gap advance, so every item becomes an event
/// and stream termination becomes exhaustion. Streams cannot be rewound;
/// reset keeps the default unsupported behavior.
pub struct StreamFeed<S> {
    inner: S,
}

impl<S> StreamFeed<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S, T> Feed for StreamFeed<S>
where
    S: Stream<Item = T> + Send + Unpin,
    T: Send,
{
    type Event = T;

    async fn advance(&mut self) -> Result<FeedStep<T>> {
        Ok(match self.inner.next().await {
            Some(event) => FeedStep::Event(event),
            None => FeedStep::Done,
        })
    }
}
