use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown classification label: {0}")]
    UnknownLabel(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
