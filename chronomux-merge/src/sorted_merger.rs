// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::feed_handle::FeedHandle;
use chronomux_core::{Result, Timestamped};

/// Sort position of one feed head. `Exhausted` sorts after every timestamp,
/// so spent feeds fall to the end of the working set without being removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HeadKey<Ts: Ord + Copy> {
    At(Ts),
    Exhausted,
}

#[derive(Debug, Clone, Copy)]
struct HeadRecord<Ts: Ord + Copy> {
    key: HeadKey<Ts>,
    handle: usize,
}

/// Repeated-minimum merge over a kept-sorted array of feed heads, used for
/// large feed counts.
///
/// The backing array has fixed length; an `active` counter shrinks as feeds
/// exhaust. At the start of every step the first `active` records are sorted
/// by timestamp, so the minimum is always at index 0. After emitting, the
/// head record is repositioned by binary search plus an in-place shift rather
/// than a full re-sort: when feeds are sampled near-periodically the head
/// barely moves, and the shift is O(1) amortized.
///
/// The advance that follows an emission is deferred to the next call, so a
/// feed that fails right after producing an event surfaces its error without
/// losing the event.
pub struct SortedMerger<T: Timestamped> {
    handles: Vec<FeedHandle<T>>,
    heads: Vec<HeadRecord<T::Time>>,
    active: usize,
    pending_advance: bool,
    primed: bool,
}

impl<T: Timestamped + Send> SortedMerger<T> {
    pub fn new(handles: Vec<FeedHandle<T>>) -> Self {
        Self {
            handles,
            heads: Vec::new(),
            active: 0,
            pending_advance: false,
            primed: false,
        }
    }

    /// Produces the next merged event, or `None` once every feed is
    /// exhausted.
    ///
    /// # Errors
    /// Feed failures propagate unmodified; the merger is left mid-step and
    /// must not be pulled again.
    pub async fn next_event(&mut self) -> Result<Option<T>> {
        if !self.primed {
            self.prime().await?;
        }
        if self.pending_advance {
            self.pending_advance = false;
            let idx = self.heads[0].handle;
            if self.handles[idx].advance().await? {
                match self.handles[idx].time() {
                    Some(time) => self.reposition(HeadKey::At(time)),
                    None => self.retire(),
                }
            } else {
                self.retire();
            }
        }
        while self.active > 0 {
            let idx = self.heads[0].handle;
            match self.handles[idx].take() {
                Some(event) => {
                    self.pending_advance = true;
                    return Ok(Some(event));
                }
                None => self.retire(),
            }
        }
        Ok(None)
    }

    /// Advance every handle to its first event and sort the head records.
    async fn prime(&mut self) -> Result<()> {
        self.heads.reserve_exact(self.handles.len());
        for idx in 0..self.handles.len() {
            self.handles[idx].advance().await?;
            let key = match self.handles[idx].time() {
                Some(time) => HeadKey::At(time),
                None => HeadKey::Exhausted,
            };
            self.heads.push(HeadRecord { key, handle: idx });
        }
        self.heads.sort_unstable_by(|a, b| a.key.cmp(&b.key));
        self.active = self
            .heads
            .iter()
            .filter(|record| record.key != HeadKey::Exhausted)
            .count();
        self.primed = true;
        Ok(())
    }

    /// Moves the head record at index 0 to its sorted position among the
    /// active records, shifting the records in between down by one slot.
    fn reposition(&mut self, key: HeadKey<T::Time>) {
        self.heads[0].key = key;
        let pos = self.heads[1..self.active].partition_point(|record| record.key < key);
        self.heads[..=pos].rotate_left(1);
    }

    /// Demotes the head record at index 0 to the end of the active region and
    /// shrinks the region by one.
    fn retire(&mut self) {
        self.heads[0].key = HeadKey::Exhausted;
        self.heads[..self.active].rotate_left(1);
        self.active -= 1;
    }

    /// The number of feeds still able to produce events.
    pub fn active_feeds(&self) -> usize {
        if self.primed {
            self.active
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

#[cfg(test)]
mod tests {
    use super::HeadKey;

    #[test]
    fn exhausted_sorts_after_every_timestamp() {
        assert!(HeadKey::At(u64::MAX) < HeadKey::Exhausted);
        assert!(HeadKey::At(0u64) < HeadKey::At(1u64));
        assert_eq!(HeadKey::<u64>::Exhausted, HeadKey::Exhausted);
    }
}
