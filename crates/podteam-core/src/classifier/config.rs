use serde::{Deserialize, Serialize};

use podteam_model::{
    ANNOTATION_BUILD_URL, ClassificationLabel, DEFAULT_BUILD_URL_KEYWORDS, DEFAULT_IMAGE_KEYWORDS,
    SCHEDULING_HINT_KEY, TEAM_OTHER_VALUE, TEAM_SELF_VALUE,
};

use crate::error::CoreError;

/// Vocabulary of the classifier.
///
/// Missing fields fall back to the defaults from `podteam-model`, so a
/// partial document only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// Node selector key written on every pod.
    pub scheduling_hint_key: String,
    /// Node selector value for [`ClassificationLabel::TeamSelf`].
    pub self_label: String,
    /// Node selector value for [`ClassificationLabel::TeamOther`].
    pub other_label: String,
    /// Annotation holding the CI build URL.
    pub build_url_annotation: String,
    /// Substrings of the build URL that classify a pod as ours.
    pub build_url_keywords: Vec<String>,
    /// Substrings of a container image that classify a pod as ours.
    pub image_keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            scheduling_hint_key: SCHEDULING_HINT_KEY.to_string(),
            self_label: TEAM_SELF_VALUE.to_string(),
            other_label: TEAM_OTHER_VALUE.to_string(),
            build_url_annotation: ANNOTATION_BUILD_URL.to_string(),
            build_url_keywords: DEFAULT_BUILD_URL_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            image_keywords: DEFAULT_IMAGE_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ClassifierConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(s: &str) -> Result<Self, CoreError> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| CoreError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Node selector value for a label.
    pub fn label_value(&self, label: ClassificationLabel) -> &str {
        match label {
            ClassificationLabel::TeamSelf => &self.self_label,
            ClassificationLabel::TeamOther => &self.other_label,
        }
    }

    /// Check the config is usable.
    ///
    /// An empty keyword is rejected: it is a substring of every string and would
    /// classify every pod as ours.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.scheduling_hint_key.trim().is_empty() {
            return Err(CoreError::Config("schedulingHintKey cannot be empty".into()));
        }
        if self.build_url_annotation.trim().is_empty() {
            return Err(CoreError::Config("buildUrlAnnotation cannot be empty".into()));
        }
        if self.self_label.is_empty() || self.other_label.is_empty() {
            return Err(CoreError::Config("team labels cannot be empty".into()));
        }
        if self.self_label == self.other_label {
            return Err(CoreError::Config(format!(
                "selfLabel and otherLabel must differ (both are '{}')",
                self.self_label
            )));
        }
        if self.build_url_keywords.iter().any(|k| k.is_empty()) {
            return Err(CoreError::Config("buildUrlKeywords contains an empty keyword".into()));
        }
        if self.image_keywords.iter().any(|k| k.is_empty()) {
            return Err(CoreError::Config("imageKeywords contains an empty keyword".into()));
        }
        Ok(())
    }
}
