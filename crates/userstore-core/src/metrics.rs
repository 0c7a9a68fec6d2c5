//! Metrics seam between the store and whatever exports its numbers.
//!
//! The store only writes: it bumps named counters and registers one gauge
//! at construction. It never reads a metric back to make a decision.

use std::sync::Arc;

/// Counter: users created.
pub const USERS_CREATED: &str = "users.created";
/// Counter: successful lookups by id.
pub const USERS_RETRIEVED: &str = "users.retrieved";
/// Counter: lookups by id that missed.
pub const USERS_NOT_FOUND: &str = "users.not_found";
/// Counter: users updated.
pub const USERS_UPDATED: &str = "users.updated";
/// Counter: users deleted.
pub const USERS_DELETED: &str = "users.deleted";
/// Gauge: users currently stored.
pub const USERS_COUNT: &str = "users.count";

/// Live read backing a gauge.
pub type GaugeSource = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Sink for the store's operational metrics.
pub trait MetricsSink: Send + Sync {
    /// Add 1 to the named counter, creating it at 0 if needed.
    fn increment_counter(&self, name: &'static str);

    /// Register a gauge whose value is read from `source` at export time.
    /// Re-registering a name replaces the previous source.
    fn register_gauge(&self, name: &'static str, source: GaugeSource);
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn increment_counter(&self, _name: &'static str) {}

    fn register_gauge(&self, _name: &'static str, _source: GaugeSource) {}
}
