// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use chronomux_core::{Feed, FeedStep, Result};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A feed backed by a tokio unbounded channel.
///
/// Tests push events through the sender and drop it to exhaust the feed.
/// Advancing an open but empty channel awaits the next send, which is how
/// blocking underlying sources are exercised. Not resettable.
pub struct ChannelFeed<T> {
    receiver: UnboundedReceiver<T>,
}

impl<T> ChannelFeed<T> {
    pub fn new() -> (UnboundedSender<T>, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (sender, Self { receiver })
    }
}

#[async_trait]
impl<T: Send> Feed for ChannelFeed<T> {
    type Event = T;

    async fn advance(&mut self) -> Result<FeedStep<T>> {
        Ok(match self.receiver.recv().await {
            Some(event) => FeedStep::Event(event),
            None => FeedStep::Done,
        })
    }
}
