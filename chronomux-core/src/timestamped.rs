// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Read-only time extraction for payloads carried through the merge engine.
///
/// The engine is polymorphic over its payload type and needs exactly one
/// capability from it: "given an item, return its timestamp". Concrete use
/// cases (a market-data snapshot, a sensor reading, a log record) supply it by
/// implementing this trait; the engine has no default and cannot run without
/// it.
///
/// # Type Parameters
/// * `Time` - The type representing the timestamp (must be `Ord + Copy`)
///
/// # Examples
///
/// ```
/// use chronomux_core::Timestamped;
///
/// #[derive(Clone, Debug)]
/// struct Reading {
///     value: f64,
///     at_nanos: u64,
/// }
///
/// impl Timestamped for Reading {
///     type Time = u64;
///
///     fn event_time(&self) -> u64 {
///         self.at_nanos
///     }
/// }
/// ```
///
/// # Different time types
///
/// `Time` is generic and can represent various time sources: monotonic
/// counters (`u64`, `u128`) for event sourcing and tests, or wall-clock
/// instants for real-time systems:
///
/// ```
/// use chronomux_core::Timestamped;
/// use std::time::Instant;
///
/// #[derive(Clone, Debug)]
/// struct Timed<T> {
///     value: T,
///     at: Instant,
/// }
///
/// impl<T> Timestamped for Timed<T> {
///     type Time = Instant;
///     fn event_time(&self) -> Instant { self.at }
/// }
/// ```
pub trait Timestamped {
    /// The type representing the timestamp
    type Time: Ord + Copy + Send + Sync + std::fmt::Debug;

    /// Returns the timestamp for this item.
    /// The merge engine uses this to establish the global emission order.
    fn event_time(&self) -> Self::Time;
}
