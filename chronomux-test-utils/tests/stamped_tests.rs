// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronomux_core::Timestamped;
use chronomux_test_utils::{helpers, Snapshot, Stamped};

#[test]
fn event_time_is_the_stamp_not_the_value() {
    let early = Stamped::at(99u32, 1);
    let late = Stamped::at(1u32, 2);
    assert!(early.event_time() < late.event_time());
    assert_eq!(early.time(), 1);
}

#[test]
fn equality_requires_value_and_time() {
    assert_eq!(Stamped::at(5u32, 7), Stamped::at(5u32, 7));
    assert_ne!(Stamped::at(5u32, 7), Stamped::at(5u32, 8));
    assert_ne!(Stamped::at(5u32, 7), Stamped::at(6u32, 7));
}

#[test]
fn deref_exposes_the_inner_value() {
    let stamped = Stamped::at(String::from("tick"), 3);
    assert_eq!(stamped.len(), 4);
    assert_eq!(stamped.into_inner(), "tick");
}

#[test]
fn snapshot_keeps_its_fields() {
    let snapshot = Snapshot::new("EURUSD", 42, &[("bid", 1.08), ("ask", 1.09)]);
    assert_eq!(snapshot.event_time(), 42);
    assert_eq!(snapshot.field_count(), 2);
    assert_eq!(snapshot.fields[0].0, "bid");
}

#[test]
fn stamped_series_stamps_value_as_time() {
    let series = helpers::stamped_series(&[3, 1, 4]);
    assert_eq!(series[1], Stamped::at(1, 1));
}

#[test]
fn assert_non_decreasing_accepts_ties() {
    helpers::assert_non_decreasing(&helpers::stamped_series(&[1, 1, 2, 9]));
}
