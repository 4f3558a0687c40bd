use std::{sync::Arc, time::Duration};

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, proto::MetricFamily};

use podteam_core::{HandleResult, MetricsBackend};
use podteam_model::ClassificationLabel;

/// Prometheus metrics backend.
///
/// ## Label cardinality
/// All labels are bounded:
/// - `label`: "team_self", "team_other"
/// - `rule`: "build_url", "image", "fallback"
/// - `error_kind`: "decode", "serialize", "original_payload", "config"
/// - `result`: "patched", "errored"
#[derive(Clone)]
pub struct PrometheusMetrics {
    classifications: CounterVec,
    failures: CounterVec,
    duration: HistogramVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a backend registering its metrics in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let classifications = CounterVec::new(
            Opts::new(
                "classifications_total",
                "Admitted workloads by assigned team and deciding rule",
            )
            .namespace("podteam"),
            &["label", "rule"],
        )?;
        registry.register(Box::new(classifications.clone()))?;

        let failures = CounterVec::new(
            Opts::new("failures_total", "Admission requests that failed").namespace("podteam"),
            &["error_kind"],
        )?;
        registry.register(Box::new(failures.clone()))?;

        // Handling is pure CPU work on one object; buckets start well below a millisecond.
        let duration = HistogramVec::new(
            HistogramOpts::new(
                "handle_duration_seconds",
                "Time spent handling one admission request",
            )
            .namespace("podteam")
            .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1]),
            &["result"],
        )?;
        registry.register(Box::new(duration.clone()))?;

        Ok(Self {
            classifications,
            failures,
            duration,
            registry,
        })
    }

    /// Create a backend with its own registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Underlying registry, for registering host metrics alongside ours.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_classified(&self, label: ClassificationLabel, rule: &str) {
        self.classifications
            .with_label_values(&[label.as_label(), rule])
            .inc();
    }

    fn record_failure(&self, error_kind: &str) {
        self.failures.with_label_values(&[error_kind]).inc();
    }

    fn record_duration(&self, result: HandleResult, duration: Duration) {
        self.duration
            .with_label_values(&[result.as_label()])
            .observe(duration.as_secs_f64());
    }
}
