//! Shared application state for the userstore gateway.
//!
//! Owns the one `RecordStore` for the process and the metrics registry it
//! reports into. Built once in `main` (or a test) and cloned into handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use userstore_core::RecordStore;

use crate::config::GatewayConfig;
use crate::obs::MetricsRegistry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<RecordStore>,
    metrics: Arc<MetricsRegistry>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    draining: AtomicBool,
}

impl AppState {
    pub fn new(cfg: GatewayConfig) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let store = Arc::new(RecordStore::new(metrics.clone()));

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                draining: AtomicBool::new(false),
            }),
            store,
            metrics,
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Flip readiness off; `/readyz` answers 503 from now on.
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }

    /// Gauges owned by the gateway rather than the store.
    pub fn metrics_extra(&self) -> Vec<(&'static str, i64)> {
        vec![("userstore.draining", i64::from(self.is_draining()))]
    }
}
