//! Lightweight in-process observability.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler; the
//! HTTP middleware records per-route request counts and latencies.

pub mod http;
pub mod metrics;

pub use metrics::MetricsRegistry;
