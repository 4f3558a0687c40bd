use podteam_model::{POD_API_VERSION, POD_KIND, WorkloadDescriptor};

use crate::decoder::{DecodeError, Decoder};

/// JSON decoder for pod objects.
///
/// `kind` and `apiVersion` are optional in the payload, but when present they
/// must match what the decoder was built for.
#[derive(Debug, Clone)]
pub struct JsonDecoder {
    kind: Option<String>,
    api_version: Option<String>,
}

impl JsonDecoder {
    /// Decoder accepting core `v1` pods.
    pub fn pods() -> Self {
        Self {
            kind: Some(POD_KIND.to_string()),
            api_version: Some(POD_API_VERSION.to_string()),
        }
    }

    /// Decoder that accepts any `kind` / `apiVersion`.
    pub fn permissive() -> Self {
        Self {
            kind: None,
            api_version: None,
        }
    }
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::pods()
    }
}

impl Decoder for JsonDecoder {
    fn decode(&self, raw: &[u8]) -> Result<WorkloadDescriptor, DecodeError> {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Err(DecodeError::Empty);
        }

        let workload: WorkloadDescriptor = serde_json::from_slice(raw)?;

        if let (Some(expected), Some(actual)) = (self.kind.as_deref(), workload.kind()) {
            if expected != actual {
                return Err(DecodeError::UnexpectedKind {
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
        if let (Some(expected), Some(actual)) =
            (self.api_version.as_deref(), workload.api_version())
        {
            if expected != actual {
                return Err(DecodeError::UnexpectedApiVersion {
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
        Ok(workload)
    }
}
