// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod feed;
pub mod timestamped;

pub use self::error::{ChronomuxError, Result};
pub use self::feed::{BoxedFeed, Feed, FeedStep};
pub use self::timestamped::Timestamped;
