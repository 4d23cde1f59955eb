// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Lazy temporal merging of many time-ordered feeds.
//!
//! The entry point is [`Synchronizer`]: it owns one [`FeedHandle`] per
//! underlying feed, picks a merge strategy by feed count, and presents the
//! merged output as a single pull sequence (`advance` / `current`), or as a
//! `futures::Stream` via [`Synchronizer::into_stream`].
//!
//! Two mergers implement the same sequence contract:
//!
//! - [`FrontierMerger`] sweeps all active feeds against a moving minimum
//!   timestamp boundary; cheap when there is a handful of feeds.
//! - [`SortedMerger`] keeps the feed heads in a sorted array and repeatedly
//!   takes the minimum; amortizes better for many hundreds of feeds whose
//!   relative order barely changes between pulls.

pub mod feed_handle;
pub mod frontier_merger;
mod logging;
pub mod sorted_merger;
pub mod stream_feed;
pub mod synchronizer;

pub use self::feed_handle::FeedHandle;
pub use self::frontier_merger::FrontierMerger;
pub use self::sorted_merger::SortedMerger;
pub use self::stream_feed::StreamFeed;
pub use self::synchronizer::Synchronizer;
