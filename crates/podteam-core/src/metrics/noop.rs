use std::time::Duration;

use podteam_model::ClassificationLabel;

use crate::metrics::backend::{HandleResult, MetricsBackend};

/// Metrics backend that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_classified(&self, _: ClassificationLabel, _: &str) {}

    #[inline(always)]
    fn record_failure(&self, _: &str) {}

    #[inline(always)]
    fn record_duration(&self, _: HandleResult, _: Duration) {}
}
