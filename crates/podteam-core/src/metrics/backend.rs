use std::{sync::Arc, time::Duration};

use podteam_model::ClassificationLabel;

/// How a single `handle` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    /// A patch was returned.
    Patched,
    /// An error response was returned.
    Errored,
}

impl HandleResult {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            HandleResult::Patched => "patched",
            HandleResult::Errored => "errored",
        }
    }
}

/// Backend metrics collection interface.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record a classification decision.
    ///
    /// # Arguments
    /// - `label`: Chosen team
    /// - `rule`: Rule that decided (`build_url`, `image`, `fallback`)
    fn record_classified(&self, label: ClassificationLabel, rule: &str);
    /// Record a failed request.
    ///
    /// # Arguments
    /// - `error_kind`: Error category (`decode`, `serialize`, ...)
    fn record_failure(&self, error_kind: &str);
    /// Record how long a request took end to end.
    fn record_duration(&self, result: HandleResult, duration: Duration);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
