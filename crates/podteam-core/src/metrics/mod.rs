//! Metrics collection abstraction for the mutator.
//!
//! Backends (prometheus, statsd, ...) implement [`MetricsBackend`] and are injected via
//! [`crate::PodMutator::with_metrics`].
mod backend;
pub use backend::{HandleResult, MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
