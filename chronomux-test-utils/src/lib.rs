// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod channel_feed;
pub mod helpers;
pub mod scripted_feed;
pub mod snapshot;
pub mod stamped;

pub use self::channel_feed::ChannelFeed;
pub use self::scripted_feed::{ScriptStep, ScriptedFeed};
pub use self::snapshot::Snapshot;
pub use self::stamped::Stamped;
