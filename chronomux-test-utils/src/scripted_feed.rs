// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic feed fixtures driven by a step script.
//!
//! A [`ScriptedFeed`] replays a fixed sequence of advance outcomes — events,
//! gap advances, injected failures — and then reports exhaustion. It supports
//! reset by default (rewind to the start of the script) and can be made
//! non-resettable to exercise the unsupported-reset path.

use async_trait::async_trait;
use chronomux_core::{ChronomuxError, Feed, FeedStep, Result};

/// One scripted advance outcome.
#[derive(Debug, Clone)]
pub enum ScriptStep<T> {
    /// Yield a payload
    Event(T),
    /// Advance without a payload
    Gap,
    /// Fail the advance with the given message
    Fail(String),
}

/// A feed that replays a fixed script of advance outcomes.
pub struct ScriptedFeed<T> {
    script: Vec<ScriptStep<T>>,
    position: usize,
    resettable: bool,
}

impl<T: Clone + Send> ScriptedFeed<T> {
    pub fn new(script: Vec<ScriptStep<T>>) -> Self {
        Self {
            script,
            position: 0,
            resettable: true,
        }
    }

    /// A feed that yields the given events, one per advance, then exhausts.
    pub fn from_events(events: Vec<T>) -> Self {
        Self::new(events.into_iter().map(ScriptStep::Event).collect())
    }

    /// A feed that is exhausted from the very first advance.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Makes reset report `ResetUnsupported`.
    #[must_use]
    pub fn without_reset(mut self) -> Self {
        self.resettable = false;
        self
    }
}

#[async_trait]
impl<T: Clone + Send> Feed for ScriptedFeed<T> {
    type Event = T;

    async fn advance(&mut self) -> Result<FeedStep<T>> {
        let Some(step) = self.script.get(self.position) else {
            return Ok(FeedStep::Done);
        };
        self.position += 1;
        match step {
            ScriptStep::Event(event) => Ok(FeedStep::Event(event.clone())),
            ScriptStep::Gap => Ok(FeedStep::Gap),
            ScriptStep::Fail(message) => Err(ChronomuxError::feed_failure(message.clone())),
        }
    }

    fn reset(&mut self) -> Result<()> {
        if !self.resettable {
            return Err(ChronomuxError::reset_unsupported("scripted feed"));
        }
        self.position = 0;
        Ok(())
    }
}
