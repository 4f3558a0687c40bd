//! JSON Patch (RFC 6902) operations returned to the API server.
mod pointer;
pub use pointer::PointerBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single JSON Patch operation.
///
/// Only the operations a structural diff produces are modelled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    /// Insert `value` at `path` (object member or array index).
    Add { path: String, value: Value },
    /// Delete whatever is at `path`.
    Remove { path: String },
    /// Overwrite the existing value at `path`.
    Replace { path: String, value: Value },
}

impl PatchOperation {
    /// JSON pointer this operation targets.
    pub fn path(&self) -> &str {
        match self {
            PatchOperation::Add { path, .. }
            | PatchOperation::Remove { path }
            | PatchOperation::Replace { path, .. } => path,
        }
    }

    /// Operation name as it appears on the wire.
    pub fn op(&self) -> &'static str {
        match self {
            PatchOperation::Add { .. } => "add",
            PatchOperation::Remove { .. } => "remove",
            PatchOperation::Replace { .. } => "replace",
        }
    }

    /// Value carried by `add` / `replace`.
    pub fn value(&self) -> Option<&Value> {
        match self {
            PatchOperation::Add { value, .. } | PatchOperation::Replace { value, .. } => {
                Some(value)
            }
            PatchOperation::Remove { .. } => None,
        }
    }
}

/// Ordered list of operations, serialized as a plain JSON array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct Patch(pub Vec<PatchOperation>);

impl Patch {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, op: PatchOperation) {
        self.0.push(op);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatchOperation> {
        self.0.iter()
    }
}
