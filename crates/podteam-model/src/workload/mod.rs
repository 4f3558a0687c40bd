mod descriptor;
pub use descriptor::{Container, ObjectMeta, PodSpec, WorkloadDescriptor};

mod identity;
pub use identity::WorkloadIdentity;
