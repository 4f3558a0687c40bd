//! Well-known keys and values of the team classification.
//!
//! These are the defaults behind `ClassifierConfig` in `podteam-core`.
//! Nothing outside this module should spell them out as literals.

/// Node selector key written on every admitted pod.
pub const SCHEDULING_HINT_KEY: &str = "cicd.devel/team";

/// Node selector value for pods built by our own pipelines.
pub const TEAM_SELF_VALUE: &str = "we";

/// Node selector value for everything else.
pub const TEAM_OTHER_VALUE: &str = "others";

/// Pod annotation carrying the URL of the CI job that produced the workload.
///
/// e.g. `http://172.26.0.7:30237/job/tos-auto-build/job/r/job/master/45/`
pub const ANNOTATION_BUILD_URL: &str = "buildUrl";

/// Substrings of [`ANNOTATION_BUILD_URL`] that mark a pod as ours.
pub const DEFAULT_BUILD_URL_KEYWORDS: &[&str] = &["tos-auto-build"];

/// Substrings of a container image reference that mark a pod as ours.
///
/// e.g. `172.16.1.99/tostmp/kube-build-base:latest`
pub const DEFAULT_IMAGE_KEYWORDS: &[&str] = &["kube-build-base"];

/// `kind` of the objects this webhook mutates.
pub const POD_KIND: &str = "Pod";

/// `apiVersion` of the objects this webhook mutates.
pub const POD_API_VERSION: &str = "v1";
