mod domain;
pub use domain::{
    ANNOTATION_BUILD_URL, DEFAULT_BUILD_URL_KEYWORDS, DEFAULT_IMAGE_KEYWORDS, POD_API_VERSION,
    POD_KIND, SCHEDULING_HINT_KEY, TEAM_OTHER_VALUE, TEAM_SELF_VALUE,
};
pub use domain::{Extra, Nullable, StringMap};

mod error;
pub use error::{ModelError, ModelResult};

mod label;
pub use label::ClassificationLabel;

mod workload;
pub use workload::{Container, ObjectMeta, PodSpec, WorkloadDescriptor, WorkloadIdentity};

mod patch;
pub use patch::{Patch, PatchOperation, PointerBuf};

mod admission;
pub use admission::{
    AdmissionRequest, AdmissionResponse, AdmissionStatus, MutationOutcome, PATCH_TYPE_JSON_PATCH,
    ResponseStatus,
};
