use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Team a workload is classified into.
///
/// Exactly one label is assigned per admission request. The node selector
/// value each label maps to is configured on the classifier, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum ClassificationLabel {
    /// Built by our own pipelines.
    TeamSelf,
    /// Anything that did not match a rule.
    TeamOther,
}

impl ClassificationLabel {
    /// Stable, low-cardinality name used in logs and metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            ClassificationLabel::TeamSelf => "team_self",
            ClassificationLabel::TeamOther => "team_other",
        }
    }
}

impl fmt::Display for ClassificationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for ClassificationLabel {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim() {
            "team_self" => Ok(ClassificationLabel::TeamSelf),
            "team_other" => Ok(ClassificationLabel::TeamOther),
            other => Err(ModelError::UnknownLabel(other.to_string())),
        }
    }
}
