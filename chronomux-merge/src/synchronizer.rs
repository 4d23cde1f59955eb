// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::feed_handle::FeedHandle;
use crate::frontier_merger::FrontierMerger;
use crate::logging::{info, warn};
use crate::sorted_merger::SortedMerger;
use crate::stream_feed::StreamFeed;
use chronomux_core::{BoxedFeed, ChronomuxError, Result, Timestamped};
use futures::Stream;

enum Engine<T: Timestamped> {
    Frontier(FrontierMerger<T>),
    Sorted(SortedMerger<T>),
    Disposed,
}

/// The public facade over the merge engine: a single-consumer pull sequence
/// across all owned feeds.
///
/// A synchronizer owns one [`FeedHandle`] per feed and, at construction and
/// after every [`reset`](Synchronizer::reset), builds one of the two mergers
/// over them — [`FrontierMerger`] below
/// [`SORTED_THRESHOLD`](Synchronizer::SORTED_THRESHOLD) feeds,
/// [`SortedMerger`] at or above it. The caller drives it with
/// [`advance`](Synchronizer::advance) and reads
/// [`current`](Synchronizer::current); exhaustion is sticky until a reset.
///
/// Not safe for concurrent pulls from multiple callers; exactly one logical
/// "produce next item" operation is ever in flight.
///
/// # Examples
///
/// ```
/// use chronomux_merge::Synchronizer;
/// use futures::stream;
///
/// # #[derive(Clone, Debug)]
/// # struct Tick(u64);
/// # impl chronomux_core::Timestamped for Tick {
/// #     type Time = u64;
/// #     fn event_time(&self) -> u64 { self.0 }
/// # }
/// # async fn example() -> chronomux_core::Result<()> {
/// let early = stream::iter(vec![Tick(1), Tick(3)]);
/// let late = stream::iter(vec![Tick(2), Tick(4)]);
/// let mut sync = Synchronizer::from_streams(vec![early, late]);
///
/// let mut times = Vec::new();
/// while sync.advance().await? {
///     times.push(sync.current().map(|t| t.0));
/// }
/// assert_eq!(times, vec![Some(1), Some(2), Some(3), Some(4)]);
/// # Ok(())
/// # }
/// ```
pub struct Synchronizer<T: Timestamped> {
    engine: Engine<T>,
    current: Option<T>,
    exhausted: bool,
}

impl<T: Timestamped + Send> Synchronizer<T> {
    /// Feed count at which the kept-sorted merge takes over from the
    /// frontier sweep.
    pub const SORTED_THRESHOLD: usize = 500;

    /// Builds a synchronizer over the given feeds.
    ///
    /// Zero feeds is not an error: the first pull simply reports exhaustion.
    pub fn new(feeds: Vec<BoxedFeed<T>>) -> Self {
        let handles = feeds.into_iter().map(FeedHandle::new).collect();
        Self {
            engine: Self::build_engine(handles),
            current: None,
            exhausted: false,
        }
    }

    /// Builds a synchronizer over plain `futures::Stream`s, each wrapped in a
    /// [`StreamFeed`].
    pub fn from_streams<S>(streams: Vec<S>) -> Self
    where
        S: Stream<Item = T> + Send + Unpin + 'static,
    {
        Self::new(
            streams
                .into_iter()
                .map(|stream| Box::new(StreamFeed::new(stream)) as BoxedFeed<T>)
                .collect(),
        )
    }

    fn build_engine(handles: Vec<FeedHandle<T>>) -> Engine<T> {
        let count = handles.len();
        if count < Self::SORTED_THRESHOLD {
            info!("synchronizer: frontier merge over {count} feeds");
            Engine::Frontier(FrontierMerger::new(handles))
        } else {
            info!("synchronizer: sorted merge over {count} feeds");
            Engine::Sorted(SortedMerger::new(handles))
        }
    }

    /// Pulls the next merged event.
    ///
    /// Returns `true` if an event is now available via
    /// [`current`](Synchronizer::current), `false` once the merge is
    /// exhausted. Exhaustion is sticky: further calls keep returning `false`
    /// until [`reset`](Synchronizer::reset).
    ///
    /// # Errors
    /// [`ChronomuxError::Disposed`] after [`dispose`](Synchronizer::dispose);
    /// feed failures propagate unmodified, after which the synchronizer is in
    /// an undefined state and must be disposed.
    pub async fn advance(&mut self) -> Result<bool> {
        if matches!(self.engine, Engine::Disposed) {
            warn!("synchronizer: advance after dispose");
            return Err(ChronomuxError::Disposed);
        }
        if self.exhausted {
            self.current = None;
            return Ok(false);
        }
        let next = match &mut self.engine {
            Engine::Frontier(merger) => merger.next_event().await,
            Engine::Sorted(merger) => merger.next_event().await,
            Engine::Disposed => return Err(ChronomuxError::Disposed),
        };
        match next? {
            Some(event) => {
                self.current = Some(event);
                Ok(true)
            }
            None => {
                self.current = None;
                self.exhausted = true;
                Ok(false)
            }
        }
    }

    /// The event produced by the last successful
    /// [`advance`](Synchronizer::advance), if any.
    pub const fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Takes the current event, leaving none until the next advance.
    pub fn take_current(&mut self) -> Option<T> {
        self.current.take()
    }

    /// `true` once the merge has reported exhaustion and has not been reset.
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Rewinds every owned feed in place and rebuilds a fresh merger over
    /// them.
    ///
    /// A running merge carries non-reconstructible internal state (current
    /// frontier, sorted positions), so the merge sequence is regenerated from
    /// rewound sources, never rewound itself.
    ///
    /// # Errors
    /// [`ChronomuxError::Disposed`] on a disposed synchronizer.
    /// [`ResetUnsupported`](ChronomuxError::ResetUnsupported) if any owned
    /// feed cannot rewind; the synchronizer is left disposed in that case,
    /// since a half-rewound feed set has no meaningful merge order.
    pub fn reset(&mut self) -> Result<()> {
        let engine = std::mem::replace(&mut self.engine, Engine::Disposed);
        let mut handles = match engine {
            Engine::Frontier(merger) => merger.into_handles(),
            Engine::Sorted(merger) => merger.into_handles(),
            Engine::Disposed => return Err(ChronomuxError::Disposed),
        };
        for handle in &mut handles {
            handle.reset()?;
        }
        info!("synchronizer: reset {} feeds", handles.len());
        self.engine = Self::build_engine(handles);
        self.current = None;
        self.exhausted = false;
        Ok(())
    }

    /// Releases every owned feed and the active merger. Idempotent; safe to
    /// call from any state. A disposed synchronizer reports
    /// [`ChronomuxError::Disposed`] from every subsequent pull or reset.
    pub fn dispose(&mut self) {
        self.engine = Engine::Disposed;
        self.current = None;
    }

    /// Consumes the synchronizer, exposing the merged output as a stream of
    /// `Result<T>` that ends at exhaustion or at the first feed failure.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        futures::stream::try_unfold(self, |mut sync| async move {
            if sync.advance().await? {
                Ok(sync.take_current().map(|event| (event, sync)))
            } else {
                Ok(None)
            }
        })
    }
}
