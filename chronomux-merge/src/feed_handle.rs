// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronomux_core::{BoxedFeed, FeedStep, Result, Timestamped};

/// One underlying feed plus its last-pulled event and active status.
///
/// Handles are created and owned by the [`Synchronizer`](crate::Synchronizer)
/// and advanced only by a merger. Once a handle reports exhaustion it is never
/// advanced again within that merge pass; [`reset`](FeedHandle::reset) rewinds
/// the feed in place and reactivates the handle for the next pass.
///
/// Gap advances are absorbed here: [`advance`](FeedHandle::advance) keeps
/// pulling until the feed yields an event or exhausts, so while a handle is
/// active it always holds an event. A feed is never dropped from the active
/// set merely for gapping.
pub struct FeedHandle<T: Timestamped> {
    feed: BoxedFeed<T>,
    current: Option<T>,
    active: bool,
}

impl<T: Timestamped + Send> FeedHandle<T> {
    pub fn new(feed: BoxedFeed<T>) -> Self {
        Self {
            feed,
            current: None,
            active: true,
        }
    }

    /// Advances the underlying feed until it yields an event or exhausts.
    ///
    /// Returns `true` if an event is now current, `false` on exhaustion.
    /// Exhausted handles stay exhausted; advancing one is a no-op.
    ///
    /// # Errors
    /// Feed failures propagate unmodified.
    pub async fn advance(&mut self) -> Result<bool> {
        if !self.active {
            return Ok(false);
        }
        loop {
            match self.feed.advance().await? {
                FeedStep::Event(event) => {
                    self.current = Some(event);
                    return Ok(true);
                }
                FeedStep::Gap => {}
                FeedStep::Done => {
                    self.release();
                    return Ok(false);
                }
            }
        }
    }

    /// The last-pulled event, if any.
    pub const fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Takes the last-pulled event, leaving the handle without one.
    pub fn take(&mut self) -> Option<T> {
        self.current.take()
    }

    /// The timestamp of the last-pulled event, if any.
    pub fn time(&self) -> Option<T::Time> {
        self.current.as_ref().map(Timestamped::event_time)
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Drops the buffered event and marks the handle exhausted.
    pub fn release(&mut self) {
        self.current = None;
        self.active = false;
    }

    /// Rewinds the underlying feed in place and reactivates the handle.
    ///
    /// # Errors
    /// [`ResetUnsupported`](chronomux_core::ChronomuxError::ResetUnsupported)
    /// if the feed cannot be rewound.
    pub fn reset(&mut self) -> Result<()> {
        self.feed.reset()?;
        self.current = None;
        self.active = true;
        Ok(())
    }
}
