use std::fmt;

use crate::Patch;

/// HTTP-style status attached to a failed mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdmissionStatus {
    /// The object could not be decoded.
    BadRequest,
    /// The mutated object could not be encoded or diffed.
    InternalError,
}

impl AdmissionStatus {
    /// Numeric HTTP status code.
    #[inline]
    pub const fn code(&self) -> u16 {
        match self {
            AdmissionStatus::BadRequest => 400,
            AdmissionStatus::InternalError => 500,
        }
    }
}

impl fmt::Display for AdmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdmissionStatus::BadRequest => "Bad Request",
            AdmissionStatus::InternalError => "Internal Server Error",
        };
        write!(f, "{} {}", self.code(), s)
    }
}

/// Result of running one admission request through the mutator.
///
/// There is no "allowed without changes" variant: every decoded workload gets
/// its scheduling hint written, even when the value was already there (the
/// patch is then empty).
#[derive(Clone, Debug, PartialEq)]
pub enum MutationOutcome {
    /// Diff against the original payload.
    Patched(Patch),
    /// Terminal failure for this request.
    Errored {
        status: AdmissionStatus,
        message: String,
    },
}

impl MutationOutcome {
    /// Failure with the given status and cause.
    pub fn errored(status: AdmissionStatus, cause: impl fmt::Display) -> Self {
        MutationOutcome::Errored {
            status,
            message: cause.to_string(),
        }
    }

    pub fn is_patched(&self) -> bool {
        matches!(self, MutationOutcome::Patched(_))
    }

    pub fn patch(&self) -> Option<&Patch> {
        match self {
            MutationOutcome::Patched(p) => Some(p),
            MutationOutcome::Errored { .. } => None,
        }
    }

    pub fn status(&self) -> Option<AdmissionStatus> {
        match self {
            MutationOutcome::Patched(_) => None,
            MutationOutcome::Errored { status, .. } => Some(*status),
        }
    }
}
