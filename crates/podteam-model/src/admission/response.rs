use serde::{Deserialize, Serialize};

use crate::{MutationOutcome, Patch};

/// `patchType` value for JSON Patch responses.
pub const PATCH_TYPE_JSON_PATCH: &str = "JSONPatch";

/// Admission response handed back to the webhook host.
///
/// Mirrors the `response` half of a Kubernetes `AdmissionReview`, except that
/// `patch` is kept as structured operations; base64 encoding is left to the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct AdmissionResponse {
    pub uid: String,
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Patch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResponseStatus>,
}

/// Failure details of a response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ResponseStatus {
    pub code: u16,
    pub message: String,
}

impl AdmissionResponse {
    /// Build the response for request `uid` from a mutation outcome.
    ///
    /// A patch always admits; an error never does.
    pub fn from_outcome(uid: impl Into<String>, outcome: MutationOutcome) -> Self {
        let uid = uid.into();
        match outcome {
            MutationOutcome::Patched(patch) => Self {
                uid,
                allowed: true,
                patch_type: Some(PATCH_TYPE_JSON_PATCH.to_string()),
                patch: Some(patch),
                status: None,
            },
            MutationOutcome::Errored { status, message } => Self {
                uid,
                allowed: false,
                patch_type: None,
                patch: None,
                status: Some(ResponseStatus {
                    code: status.code(),
                    message,
                }),
            },
        }
    }
}
