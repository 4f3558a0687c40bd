/// Admission request as handed over by the webhook host.
///
/// The host has already unwrapped the transport envelope. `object` holds the
/// workload exactly as the API server sent it: the patch is computed against
/// these bytes, so they must not be re-encoded on the way in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdmissionRequest {
    /// Request UID, echoed back in the response.
    pub uid: String,
    /// Namespace from the envelope (the object itself may omit it).
    pub namespace: Option<String>,
    /// Object name from the envelope.
    pub name: Option<String>,
    /// `CREATE`, `UPDATE`, ...
    pub operation: Option<String>,
    /// Raw JSON of the object under admission.
    pub object: Vec<u8>,
}

impl AdmissionRequest {
    /// Request carrying only a UID and the raw object.
    pub fn new(uid: impl Into<String>, object: impl Into<Vec<u8>>) -> Self {
        Self {
            uid: uid.into(),
            object: object.into(),
            ..Default::default()
        }
    }

    /// Set the namespace reported by the envelope.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the object name reported by the envelope.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the operation reported by the envelope.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }
}
