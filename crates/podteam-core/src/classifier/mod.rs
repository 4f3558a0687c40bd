//! Team classification of workloads.
//!
//! Rules are evaluated in a fixed order and the first one that matches wins:
//! 1. the build URL annotation contains a build URL keyword;
//! 2. some container image contains an image keyword.
//!
//! Both rules classify the workload as [`ClassificationLabel::TeamSelf`];
//! a workload no rule claims falls back to [`ClassificationLabel::TeamOther`].
mod config;
pub use config::ClassifierConfig;

mod rule;
use rule::{BuildUrlRule, ImageRule, Rule};

use std::fmt;

use podteam_model::{ClassificationLabel, WorkloadDescriptor};

use crate::error::CoreError;

/// Which rule produced a [`Decision`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchedRule {
    /// The build URL annotation contained `keyword`.
    BuildUrl { keyword: String },
    /// The image of container number `container` contained `keyword`.
    Image { container: usize, keyword: String },
    /// Nothing matched.
    Fallback,
}

impl MatchedRule {
    /// Stable rule name for metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            MatchedRule::BuildUrl { .. } => "build_url",
            MatchedRule::Image { .. } => "image",
            MatchedRule::Fallback => "fallback",
        }
    }
}

impl fmt::Display for MatchedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchedRule::BuildUrl { keyword } => write!(f, "build_url contains '{keyword}'"),
            MatchedRule::Image { container, keyword } => {
                write!(f, "containers[{container}].image contains '{keyword}'")
            }
            MatchedRule::Fallback => f.write_str("fallback"),
        }
    }
}

/// Label plus the reason it was chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub label: ClassificationLabel,
    pub rule: MatchedRule,
}

/// Stateless workload classifier.
///
/// Built once from a validated [`ClassifierConfig`] and shared by all requests.
pub struct Classifier {
    config: ClassifierConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl Classifier {
    /// Validate `config` and build the rule chain.
    pub fn new(config: ClassifierConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: ClassifierConfig) -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(BuildUrlRule {
                annotation: config.build_url_annotation.clone(),
                keywords: config.build_url_keywords.clone(),
            }),
            Box::new(ImageRule {
                keywords: config.image_keywords.clone(),
            }),
        ];
        Self { config, rules }
    }

    /// Config this classifier was built from.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a workload and report which rule decided.
    pub fn decide(&self, workload: &WorkloadDescriptor) -> Decision {
        self.rules
            .iter()
            .find_map(|r| r.evaluate(workload))
            .map(|rule| Decision {
                label: ClassificationLabel::TeamSelf,
                rule,
            })
            .unwrap_or(Decision {
                label: ClassificationLabel::TeamOther,
                rule: MatchedRule::Fallback,
            })
    }

    /// Classify a workload. Never fails.
    pub fn classify(&self, workload: &WorkloadDescriptor) -> ClassificationLabel {
        self.decide(workload).label
    }

    /// Classify a workload and write the resulting node selector entry into it.
    ///
    /// Missing `spec` / `nodeSelector` sections are created. An existing value under
    /// the hint key is overwritten.
    pub fn apply(&self, workload: &mut WorkloadDescriptor) -> Decision {
        let decision = self.decide(workload);
        workload.set_scheduling_hint(
            self.config.scheduling_hint_key.as_str(),
            self.config.label_value(decision.label),
        );
        decision
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_valid(ClassifierConfig::default())
    }
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("config", &self.config)
            .field("rules", &self.rules.len())
            .finish()
    }
}
