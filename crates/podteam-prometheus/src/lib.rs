//! Prometheus metrics backend for the podteam admission webhook.
//!
//! [`PrometheusMetrics`] implements [`podteam_core::MetricsBackend`] and is injected with
//! [`podteam_core::PodMutator::with_metrics`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use podteam_core::{Classifier, JsonDecoder, PodMutator};
//! use podteam_prometheus::{Encoder, PrometheusMetrics, TextEncoder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let mutator = PodMutator::new(JsonDecoder::pods(), Classifier::default())
//!     .with_metrics(Arc::new(metrics.clone()));
//!
//! // Serve this from the host's `/metrics` endpoint.
//! let mut buffer = Vec::new();
//! TextEncoder::new().encode(&metrics.gather(), &mut buffer)?;
//! # let _ = mutator;
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `podteam_classifications_total{label, rule}` - Counter
//! - `podteam_failures_total{error_kind}` - Counter
//! - `podteam_handle_duration_seconds{result}` - Histogram
//!
//! This crate does not serve `/metrics` itself; that belongs to the webhook host.

mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
