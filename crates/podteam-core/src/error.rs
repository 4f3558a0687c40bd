use podteam_model::AdmissionStatus;
use thiserror::Error;

use crate::decoder::DecodeError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to decode workload: {0}")]
    Decode(#[from] DecodeError),

    #[error("failed to serialize mutated workload: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("original payload is not valid json: {0}")]
    OriginalPayload(#[source] serde_json::Error),

    #[error("invalid classifier config: {0}")]
    Config(String),
}

impl CoreError {
    /// Status reported to the API server for this failure.
    ///
    /// Only bad input is the caller's fault; everything else is ours.
    pub fn status(&self) -> AdmissionStatus {
        match self {
            CoreError::Decode(_) => AdmissionStatus::BadRequest,
            CoreError::Serialize(_) | CoreError::OriginalPayload(_) | CoreError::Config(_) => {
                AdmissionStatus::InternalError
            }
        }
    }

    /// Low-cardinality error category for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::Decode(_) => "decode",
            CoreError::Serialize(_) => "serialize",
            CoreError::OriginalPayload(_) => "original_payload",
            CoreError::Config(_) => "config",
        }
    }
}
