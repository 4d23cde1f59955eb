// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronomux_core::Timestamped;
use std::{
    fmt,
    ops::{Deref, DerefMut},
};

/// A wrapper that pins an explicit event time onto any value for temporal
/// ordering.
///
/// Uses a plain `u64` logical timestamp so tests can state orderings exactly.
/// The engine orders items through [`Timestamped`] only, so the wrapper
/// carries no `Ord`; equality compares value and time together, which is what
/// replay assertions want.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamped<T> {
    pub value: T,
    time: u64,
}

impl<T> Stamped<T> {
    /// Creates a value stamped at the given time.
    pub const fn at(value: T, time: u64) -> Self {
        Self { value, time }
    }

    /// Gets the inner value, consuming the wrapper.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Gets a reference to the inner value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Gets the event time.
    pub const fn time(&self) -> u64 {
        self.time
    }
}

impl<T> Deref for Stamped<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> DerefMut for Stamped<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

impl<T: fmt::Display> fmt::Display for Stamped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.time)
    }
}

impl<T> Timestamped for Stamped<T> {
    type Time = u64;

    fn event_time(&self) -> u64 {
        self.time
    }
}

impl<T> From<(T, u64)> for Stamped<T> {
    fn from((value, time): (T, u64)) -> Self {
        Self::at(value, time)
    }
}
