use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use kink_test::content::ArticleRegistry;
use kink_test::store::FileResultStore;
use kink_test::vitals::{HealthStatus, VitalsLedger};

/// Shared request-handler context. Everything here is explicit process state
/// with a constructor-driven lifecycle; nothing hides in module statics.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) vitals: Arc<VitalsLedger>,
    pub(crate) articles: Arc<ArticleRegistry>,
    pub(crate) store: Arc<FileResultStore>,
}

impl AppState {
    /// Health is a live storage probe: the only hard dependency this service
    /// has is the directory the result store writes into.
    pub(crate) fn health_status(&self) -> HealthStatus {
        if self.store.probe() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        }
    }
}
