//! Decoding of raw admission objects into [`WorkloadDescriptor`]s.
//!
//! The handler receives its decoder at construction time; there is no way to
//! build a [`crate::PodMutator`] that cannot decode.
mod error;
pub use error::DecodeError;

mod json;
pub use json::JsonDecoder;

use podteam_model::WorkloadDescriptor;

/// Turns the raw object of an admission request into a typed workload.
pub trait Decoder: Send + Sync {
    fn decode(&self, raw: &[u8]) -> Result<WorkloadDescriptor, DecodeError>;
}

impl<D: Decoder + ?Sized> Decoder for std::sync::Arc<D> {
    fn decode(&self, raw: &[u8]) -> Result<WorkloadDescriptor, DecodeError> {
        (**self).decode(raw)
    }
}
