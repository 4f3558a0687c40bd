//! JSON Patch generation for mutated workloads.
//!
//! The patch is computed against the raw bytes the API server sent, never
//! against a decoded-then-reencoded copy, so it only contains what the
//! mutator actually changed.
mod diff;
pub use diff::diff;

use podteam_model::{MutationOutcome, Patch, WorkloadDescriptor};
use serde_json::Value;

use crate::error::CoreError;

/// Diff `mutated` against the original payload.
///
/// Any failure maps to an internal error: by the time a workload is mutated the
/// request was already decoded once, so a problem here is on our side.
pub fn generate_patch(original_raw: &[u8], mutated: &WorkloadDescriptor) -> MutationOutcome {
    match try_generate_patch(original_raw, mutated) {
        Ok(patch) => MutationOutcome::Patched(patch),
        Err(e) => MutationOutcome::errored(e.status(), &e),
    }
}

pub(crate) fn try_generate_patch(
    original_raw: &[u8],
    mutated: &WorkloadDescriptor,
) -> Result<Patch, CoreError> {
    let mutated = serde_json::to_value(mutated).map_err(CoreError::Serialize)?;
    let original: Value =
        serde_json::from_slice(original_raw).map_err(CoreError::OriginalPayload)?;
    Ok(diff(&original, &mutated))
}
