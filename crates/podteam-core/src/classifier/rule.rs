use podteam_model::WorkloadDescriptor;

use crate::classifier::MatchedRule;

/// One classification rule.
///
/// A rule either claims the workload (returning why) or passes.
pub(crate) trait Rule: Send + Sync {
    fn evaluate(&self, workload: &WorkloadDescriptor) -> Option<MatchedRule>;
}

/// First keyword that occurs in `haystack`, in keyword order.
fn find_keyword<'k>(haystack: &str, keywords: &'k [String]) -> Option<&'k str> {
    keywords
        .iter()
        .map(String::as_str)
        .find(|k| haystack.contains(*k))
}

/// Matches the build URL annotation against a keyword list.
pub(crate) struct BuildUrlRule {
    pub(crate) annotation: String,
    pub(crate) keywords: Vec<String>,
}

impl Rule for BuildUrlRule {
    fn evaluate(&self, workload: &WorkloadDescriptor) -> Option<MatchedRule> {
        let url = workload.annotation(&self.annotation)?;
        find_keyword(url, &self.keywords).map(|k| MatchedRule::BuildUrl {
            keyword: k.to_string(),
        })
    }
}

/// Matches container images, in declaration order, against a keyword list.
pub(crate) struct ImageRule {
    pub(crate) keywords: Vec<String>,
}

impl Rule for ImageRule {
    fn evaluate(&self, workload: &WorkloadDescriptor) -> Option<MatchedRule> {
        workload
            .containers()
            .iter()
            .enumerate()
            .find_map(|(idx, c)| {
                find_keyword(c.image(), &self.keywords).map(|k| MatchedRule::Image {
                    container: idx,
                    keyword: k.to_string(),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use podteam_model::Container;

    use super::*;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn find_keyword_is_case_sensitive_substring() {
        let kw = keywords(&["kube-build-base"]);
        assert_eq!(
            find_keyword("reg/x/kube-build-base:1", &kw),
            Some("kube-build-base")
        );
        assert_eq!(find_keyword("reg/x/KUBE-BUILD-BASE:1", &kw), None);
        assert_eq!(find_keyword("anything", &[]), None);
    }

    #[test]
    fn build_url_rule_needs_the_annotation() {
        let rule = BuildUrlRule {
            annotation: "buildUrl".into(),
            keywords: keywords(&["tos-auto-build"]),
        };

        let mut pod = WorkloadDescriptor::default();
        assert!(rule.evaluate(&pod).is_none());

        pod.set_annotation("otherUrl", "http://host/job/tos-auto-build/1/");
        assert!(rule.evaluate(&pod).is_none());

        pod.set_annotation("buildUrl", "http://host/job/tos-auto-build/1/");
        assert_eq!(
            rule.evaluate(&pod),
            Some(MatchedRule::BuildUrl {
                keyword: "tos-auto-build".into()
            })
        );
    }

    #[test]
    fn image_rule_reports_first_matching_container() {
        let rule = ImageRule {
            keywords: keywords(&["kube-build-base"]),
        };

        let mut pod = WorkloadDescriptor::default();
        pod.push_container(Container::with_image("nginx:latest"));
        pod.push_container(Container::default());
        pod.push_container(Container::with_image("172.16.1.99/tostmp/kube-build-base:latest"));
        pod.push_container(Container::with_image("kube-build-base:2"));

        assert_eq!(
            rule.evaluate(&pod),
            Some(MatchedRule::Image {
                container: 2,
                keyword: "kube-build-base".into()
            })
        );
    }
}
