//! Web-vitals bookkeeping and the aggregated health report.
//!
//! The ledger is an explicit process-scoped object handed to whoever needs it,
//! with an explicit `new`/`reset` lifecycle - counters never live in
//! module-level statics. Recording is infallible and must never block or fail
//! the primary user-facing operation that triggered it.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Measurement kinds reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VitalKind {
    Cls,
    Fcp,
    Inp,
    Lcp,
    Ttfb,
}

impl VitalKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cls => "CLS",
            Self::Fcp => "FCP",
            Self::Inp => "INP",
            Self::Lcp => "LCP",
            Self::Ttfb => "TTFB",
        }
    }
}

/// Browser-assigned rating bucket for a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VitalRating {
    Good,
    NeedsImprovement,
    Poor,
}

/// A single measurement as posted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebVital {
    pub name: VitalKind,
    pub value: f64,
    pub id: String,
    pub rating: VitalRating,
    pub delta: f64,
}

/// Aggregated counters for one vital kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct VitalAggregate {
    pub count: u64,
    pub last_value: f64,
    pub good: u64,
    pub needs_improvement: u64,
    pub poor: u64,
}

/// Process-scoped metric context. Cheap to share behind an `Arc`; the mutex
/// is held only for the few instructions a record or snapshot takes.
#[derive(Debug, Default)]
pub struct VitalsLedger {
    inner: Mutex<BTreeMap<VitalKind, VitalAggregate>>,
}

impl VitalsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, vital: &WebVital) {
        let mut guard = self.inner.lock().expect("vitals mutex poisoned");
        let aggregate = guard.entry(vital.name).or_default();
        aggregate.count += 1;
        aggregate.last_value = vital.value;
        match vital.rating {
            VitalRating::Good => aggregate.good += 1,
            VitalRating::NeedsImprovement => aggregate.needs_improvement += 1,
            VitalRating::Poor => aggregate.poor += 1,
        }
    }

    /// Drop every counter back to zero.
    pub fn reset(&self) {
        self.inner.lock().expect("vitals mutex poisoned").clear();
    }

    pub fn snapshot(&self) -> BTreeMap<VitalKind, VitalAggregate> {
        self.inner.lock().expect("vitals mutex poisoned").clone()
    }

    pub fn total_recorded(&self) -> u64 {
        self.inner
            .lock()
            .expect("vitals mutex poisoned")
            .values()
            .map(|aggregate| aggregate.count)
            .sum()
    }

    /// Aggregated payload for the health endpoint.
    pub fn report(&self, status: HealthStatus) -> HealthReport {
        HealthReport {
            status,
            vitals_recorded: self.total_recorded(),
            vitals: self.snapshot(),
        }
    }
}

/// Overall service health as exposed by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Aggregated counters plus the status field.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub vitals_recorded: u64,
    pub vitals: BTreeMap<VitalKind, VitalAggregate>,
}
