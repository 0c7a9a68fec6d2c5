//! userstore core: the user record model, its validity invariant, the error
//! taxonomy, and the concurrent in-memory `RecordStore`.
//!
//! This crate carries no transport or runtime dependencies. The HTTP layer
//! and the metrics exporter live in `userstore-gateway` and talk to the store
//! through plain method calls and the [`metrics::MetricsSink`] trait.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every failure is a
//! [`StoreError`] and none of them leaves the store modified.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod model;
pub mod search;
pub mod store;

pub use error::{ClientCode, Result, StoreError, Violation};
pub use metrics::{GaugeSource, MetricsSink, NoopMetrics};
pub use model::{User, UserDraft, UserId};
pub use store::RecordStore;
