//! In-memory `MetricsSink` shared by the store tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use userstore_core::{GaugeSource, MetricsSink};

#[derive(Default)]
pub struct RecordingSink {
    counters: Mutex<HashMap<&'static str, u64>>,
    gauges: Mutex<HashMap<&'static str, GaugeSource>>,
}

impl RecordingSink {
    pub fn counter(&self, name: &str) -> u64 {
        self.counters.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    pub fn gauge(&self, name: &str) -> Option<i64> {
        let gauges = self.gauges.lock().unwrap();
        gauges.get(name).map(|g| g())
    }
}

impl MetricsSink for RecordingSink {
    fn increment_counter(&self, name: &'static str) {
        *self.counters.lock().unwrap().entry(name).or_insert(0) += 1;
    }

    fn register_gauge(&self, name: &'static str, source: GaugeSource) {
        self.gauges.lock().unwrap().insert(name, source);
    }
}
