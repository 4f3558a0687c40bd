mod request;
pub use request::AdmissionRequest;

mod outcome;
pub use outcome::{AdmissionStatus, MutationOutcome};

mod response;
pub use response::{AdmissionResponse, PATCH_TYPE_JSON_PATCH, ResponseStatus};
