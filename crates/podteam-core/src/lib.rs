pub mod classifier;
pub mod decoder;
pub mod error;
pub mod handler;
pub mod metrics;
pub mod patch;

pub use classifier::{Classifier, ClassifierConfig, Decision, MatchedRule};
pub use decoder::{DecodeError, Decoder, JsonDecoder};
pub use error::CoreError;
pub use handler::PodMutator;
pub use metrics::{HandleResult, MetricsBackend, MetricsHandle, NoOpMetrics, noop_metrics};
pub use patch::{diff, generate_patch};

pub mod prelude {
    pub use crate::classifier::{Classifier, ClassifierConfig};
    pub use crate::decoder::{Decoder, JsonDecoder};
    pub use crate::error::CoreError;
    pub use crate::handler::PodMutator;
    pub use crate::metrics::MetricsBackend;
}
