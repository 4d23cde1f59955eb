// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::feed_handle::FeedHandle;
use chronomux_core::{Result, Timestamped};

/// Frontier-sweep merge for small feed counts.
///
/// Keeps a moving minimum-timestamp boundary (the frontier) and, per round,
/// emits from every active handle all events at the frontier, advancing each
/// handle past what it emitted. The next frontier is the minimum timestamp
/// left over once the round completes. Handles whose feed exhausts are
/// released immediately, not held until the whole pass ends.
///
/// One event per [`next_event`](FrontierMerger::next_event) call: the round
/// sweep is stored as resumable state (frontier, next frontier, cursor), so
/// nothing is materialized ahead of the caller. The advance that follows an
/// emission is deferred to the next call; a feed that fails right after
/// producing an event therefore surfaces its error without losing the event.
///
/// Output timestamps are non-decreasing across the whole pass. Within one
/// round the cross-feed order of equal-timestamp events follows handle order
/// and is not part of the contract.
pub struct FrontierMerger<T: Timestamped> {
    handles: Vec<FeedHandle<T>>,
    active: Vec<usize>,
    frontier: Option<T::Time>,
    next_frontier: Option<T::Time>,
    cursor: usize,
    pending_advance: bool,
    primed: bool,
}

impl<T: Timestamped + Send> FrontierMerger<T> {
    pub fn new(handles: Vec<FeedHandle<T>>) -> Self {
        Self {
            handles,
            active: Vec::new(),
            frontier: None,
            next_frontier: None,
            cursor: 0,
            pending_advance: false,
            primed: false,
        }
    }

    /// Produces the next merged event, or `None` once every feed is
    /// exhausted.
    ///
    /// # Errors
    /// Feed failures propagate unmodified; the merger is left mid-round and
    /// must not be pulled again.
    pub async fn next_event(&mut self) -> Result<Option<T>> {
        if !self.primed {
            self.prime().await?;
        }
        if self.pending_advance {
            self.pending_advance = false;
            let idx = self.active[self.cursor];
            if !self.handles[idx].advance().await? {
                self.active.remove(self.cursor);
            }
        }
        loop {
            while self.cursor < self.active.len() {
                let idx = self.active[self.cursor];
                let Some(time) = self.handles[idx].time() else {
                    self.active.remove(self.cursor);
                    continue;
                };
                if self.frontier.is_some_and(|frontier| time <= frontier) {
                    let event = self.handles[idx].take();
                    if let Some(event) = event {
                        self.pending_advance = true;
                        return Ok(Some(event));
                    }
                    self.active.remove(self.cursor);
                } else {
                    self.next_frontier = Some(match self.next_frontier {
                        Some(best) if best <= time => best,
                        _ => time,
                    });
                    self.cursor += 1;
                }
            }
            // Round complete; no remaining event can precede the frontier.
            if self.active.is_empty() || self.next_frontier.is_none() {
                return Ok(None);
            }
            self.frontier = self.next_frontier.take();
            self.cursor = 0;
        }
    }

    /// Advance every handle to its first event; feeds that exhaust on the
    /// first pull are released right away.
    async fn prime(&mut self) -> Result<()> {
        for idx in 0..self.handles.len() {
            if self.handles[idx].advance().await? {
                if let Some(time) = self.handles[idx].time() {
                    self.frontier = Some(match self.frontier {
                        Some(best) if best <= time => best,
                        _ => time,
                    });
                }
                self.active.push(idx);
            }
        }
        self.cursor = 0;
        self.primed = true;
        Ok(())
    }

    /// The number of feeds still able to produce events.
    pub fn active_feeds(&self) -> usize {
        if self.primed {
            self.active.len()
        } else {
            self.handles.len()
        }
    }

    /// Gives the handles back, exhausted ones included, for reset or
    /// disposal.
    pub fn into_handles(self) -> Vec<FeedHandle<T>> {
        self.handles
    }
}
