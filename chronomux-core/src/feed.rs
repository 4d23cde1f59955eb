// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{ChronomuxError, Result};
use async_trait::async_trait;

/// The outcome of advancing a [`Feed`] by one step.
///
/// A feed distinguishes three situations that the merge engine must keep
/// apart:
///
/// - [`Event`](FeedStep::Event): the advance produced a usable payload.
/// - [`Gap`](FeedStep::Gap): the advance succeeded but there is nothing to
///   emit this step. The feed stays in the active set and will be advanced
///   again; a gap is never emitted.
/// - [`Done`](FeedStep::Done): the feed is exhausted. It is never advanced
///   again within the current merge pass.
///
/// Failures while advancing are not a `FeedStep`; they surface as
/// `Err(ChronomuxError)` from [`Feed::advance`] and propagate unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStep<T> {
    /// A usable payload
    Event(T),
    /// Advanced without producing a usable payload
    Gap,
    /// No further items exist
    Done,
}

impl<T> FeedStep<T> {
    /// Returns `true` if this step carries a payload.
    pub const fn is_event(&self) -> bool {
        matches!(self, FeedStep::Event(_))
    }

    /// Returns `true` if this step is a gap advance.
    pub const fn is_gap(&self) -> bool {
        matches!(self, FeedStep::Gap)
    }

    /// Returns `true` if the feed reported exhaustion.
    pub const fn is_done(&self) -> bool {
        matches!(self, FeedStep::Done)
    }

    /// Converts into the carried payload, discarding gaps and exhaustion.
    pub fn into_event(self) -> Option<T> {
        match self {
            FeedStep::Event(event) => Some(event),
            FeedStep::Gap | FeedStep::Done => None,
        }
    }

    /// Maps the carried payload, leaving `Gap` and `Done` untouched.
    pub fn map<U, F>(self, f: F) -> FeedStep<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            FeedStep::Event(event) => FeedStep::Event(f(event)),
            FeedStep::Gap => FeedStep::Gap,
            FeedStep::Done => FeedStep::Done,
        }
    }
}

/// One caller-supplied, internally time-ordered, lazily-advancing sequence of
/// payloads.
///
/// The merge engine pulls from feeds one step at a time, exactly as needed to
/// make progress; it never buffers ahead of the emission frontier. If an
/// advance blocks (waiting on I/O, a channel, a socket), that is the feed's
/// concern and is transparently awaited.
///
/// Implementations must yield events in non-decreasing
/// [`event_time`](crate::Timestamped::event_time) order; the engine's global
/// ordering guarantee rests on that.
#[async_trait]
pub trait Feed: Send {
    /// The payload type this feed produces.
    type Event: Send;

    /// Advances the feed by one step.
    ///
    /// # Errors
    /// Any failure raised by the underlying source. The engine performs no
    /// retry and no suppression; after an error the owning synchronizer must
    /// be disposed.
    async fn advance(&mut self) -> Result<FeedStep<Self::Event>>;

    /// Rewinds the feed to its start, in place.
    ///
    /// Feeds that cannot rewind keep the default implementation.
    ///
    /// # Errors
    /// [`ChronomuxError::ResetUnsupported`] if the feed cannot be rewound.
    fn reset(&mut self) -> Result<()> {
        Err(ChronomuxError::reset_unsupported(
            "feed does not support reset",
        ))
    }
}

/// A boxed, object-safe feed as owned by the synchronizer.
pub type BoxedFeed<T> = Box<dyn Feed<Event = T>>;
