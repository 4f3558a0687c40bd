use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty object")]
    Empty,

    #[error("malformed object: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unexpected kind: expected {expected}, got {actual}")]
    UnexpectedKind { expected: String, actual: String },

    #[error("unexpected apiVersion: expected {expected}, got {actual}")]
    UnexpectedApiVersion { expected: String, actual: String },
}
