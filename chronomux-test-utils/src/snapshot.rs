// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronomux_core::Timestamped;

/// A market-data-shaped test payload: an instrument plus named numeric
/// fields.
///
/// The field list exercises payload preservation: the engine must emit
/// snapshots unmodified, field count included.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub instrument: String,
    pub time: u64,
    pub fields: Vec<(String, f64)>,
}

impl Snapshot {
    pub fn new(instrument: &str, time: u64, fields: &[(&str, f64)]) -> Self {
        Self {
            instrument: instrument.to_owned(),
            time,
            fields: fields
                .iter()
                .map(|(name, value)| ((*name).to_owned(), *value))
                .collect(),
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl Timestamped for Snapshot {
    type Time = u64;

    fn event_time(&self) -> u64 {
        self.time
    }
}
