//! Admission handler: decode, classify, mutate, diff.
use std::{fmt, time::Instant};

use podteam_model::{AdmissionRequest, AdmissionResponse, MutationOutcome, Patch, WorkloadIdentity};
use tracing::{debug, error, info, instrument};

use crate::{
    classifier::Classifier,
    decoder::Decoder,
    error::CoreError,
    metrics::{HandleResult, MetricsHandle, noop_metrics},
    patch::try_generate_patch,
};

/// Mutating admission handler for pods.
///
/// Holds no per-request state; one instance serves every request, concurrently.
/// Every request that decodes is admitted with its team node selector set.
pub struct PodMutator<D> {
    decoder: D,
    classifier: Classifier,
    metrics: MetricsHandle,
}

impl<D> PodMutator<D>
where
    D: Decoder,
{
    /// Create a handler with the given decoder and classifier.
    pub fn new(decoder: D, classifier: Classifier) -> Self {
        Self {
            decoder,
            classifier,
            metrics: noop_metrics(),
        }
    }

    /// Replace the metrics backend and return the updated handler.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Run one admission request through the mutator.
    ///
    /// Decode failures are reported as `400`, anything failing after that as `500`.
    /// Nothing is retried.
    #[instrument(level = "debug", skip_all, fields(uid = %request.uid))]
    pub fn handle(&self, request: &AdmissionRequest) -> MutationOutcome {
        let started = Instant::now();

        let outcome = match self.mutate(request) {
            Ok(patch) => MutationOutcome::Patched(patch),
            Err(e) => {
                error!(error = %e, kind = e.kind(), "failed to mutate workload");
                self.metrics.record_failure(e.kind());
                MutationOutcome::errored(e.status(), &e)
            }
        };

        let result = if outcome.is_patched() {
            HandleResult::Patched
        } else {
            HandleResult::Errored
        };
        self.metrics.record_duration(result, started.elapsed());
        outcome
    }

    /// [`Self::handle`] wrapped into the response sent back to the API server.
    pub fn review(&self, request: &AdmissionRequest) -> AdmissionResponse {
        AdmissionResponse::from_outcome(request.uid.clone(), self.handle(request))
    }

    fn mutate(&self, request: &AdmissionRequest) -> Result<Patch, CoreError> {
        let mut workload = self.decoder.decode(&request.object)?;
        let identity = identity_of(request, workload.identity());
        info!(
            workload = %identity,
            operation = request.operation.as_deref().unwrap_or_default(),
            "handling workload"
        );

        let decision = self.classifier.apply(&mut workload);
        let cfg = self.classifier.config();
        info!(
            workload = %identity,
            key = %cfg.scheduling_hint_key,
            value = %cfg.label_value(decision.label),
            rule = %decision.rule,
            "set node selector"
        );
        self.metrics
            .record_classified(decision.label, decision.rule.as_label());

        let patch = try_generate_patch(&request.object, &workload)?;
        debug!(ops = patch.len(), "computed patch");
        Ok(patch)
    }
}

/// Pods created by controllers usually carry no namespace in the object itself.
/// Fields set on the object win; the envelope fills in the empty ones.
fn identity_of(request: &AdmissionRequest, from_object: WorkloadIdentity) -> WorkloadIdentity {
    let pick = |own: &str, envelope: &Option<String>| -> String {
        match envelope {
            Some(v) if own.is_empty() => v.clone(),
            _ => own.to_string(),
        }
    };
    WorkloadIdentity::new(
        pick(from_object.namespace(), &request.namespace),
        pick(from_object.name(), &request.name),
    )
}

impl<D> fmt::Debug for PodMutator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PodMutator")
            .field("classifier", &self.classifier)
            .field("metrics", &"<handle>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use podteam_model::{AdmissionStatus, ClassificationLabel, PatchOperation};
    use serde_json::{Value, json};

    use super::*;
    use crate::{decoder::JsonDecoder, metrics::MetricsBackend};

    const HINT_PATH: &str = "/spec/nodeSelector";
    const HINT_KEY_PATH: &str = "/spec/nodeSelector/cicd.devel~1team";

    fn mutator() -> PodMutator<JsonDecoder> {
        PodMutator::new(JsonDecoder::pods(), Classifier::default())
    }

    fn request(object: Value) -> AdmissionRequest {
        AdmissionRequest::new("uid-1", serde_json::to_vec(&object).unwrap())
            .with_namespace("ci")
            .with_operation("CREATE")
    }

    fn pod(annotations: Value, images: &[&str]) -> Value {
        let containers: Vec<Value> = images
            .iter()
            .enumerate()
            .map(|(i, img)| json!({"name": format!("c{i}"), "image": img}))
            .collect();
        json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {"name": "app", "annotations": annotations},
            "spec": {"containers": containers, "nodeSelector": {}}
        })
    }

    /// Value the patch writes under the team key, at whatever depth the op targets.
    fn written_team(patch: &Patch) -> Option<String> {
        patch.iter().find_map(|op| {
            let rest = HINT_KEY_PATH.strip_prefix(op.path())?;
            op.value()?.pointer(rest)?.as_str().map(str::to_string)
        })
    }

    #[test]
    fn scenario_build_url_keyword() {
        let obj = pod(
            json!({"buildUrl": "http://host/job/tos-auto-build/job/r/45/"}),
            &["registry/app:v1"],
        );
        let outcome = mutator().handle(&request(obj));

        let patch = outcome.patch().expect("patched");
        assert_eq!(
            patch.0,
            vec![PatchOperation::Add {
                path: HINT_KEY_PATH.into(),
                value: json!("we"),
            }]
        );
    }

    #[test]
    fn scenario_image_keyword() {
        let obj = pod(json!({}), &["172.16.1.99/tostmp/kube-build-base:latest"]);
        let outcome = mutator().handle(&request(obj));
        assert_eq!(written_team(outcome.patch().unwrap()).as_deref(), Some("we"));
    }

    #[test]
    fn scenario_no_match() {
        let obj = pod(
            json!({"buildUrl": "http://host/job/unrelated/1/"}),
            &["nginx:latest"],
        );
        let outcome = mutator().handle(&request(obj));
        assert_eq!(
            written_team(outcome.patch().unwrap()).as_deref(),
            Some("others")
        );
    }

    #[test]
    fn scenario_malformed_payload() {
        let req = AdmissionRequest::new("uid-2", &br#"{"apiVersion":"v1","kind":"Po"#[..]);
        let outcome = mutator().handle(&req);

        match outcome {
            MutationOutcome::Errored { status, message } => {
                assert_eq!(status, AdmissionStatus::BadRequest);
                assert!(message.contains("decode"), "message: {message}");
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn build_url_alone_is_enough() {
        let obj = pod(
            json!({"buildUrl": "http://host/job/tos-auto-build/1/"}),
            &["nginx:latest", "busybox"],
        );
        let outcome = mutator().handle(&request(obj));
        assert_eq!(written_team(outcome.patch().unwrap()).as_deref(), Some("we"));
    }

    #[test]
    fn every_decodable_workload_gets_exactly_one_team() {
        let objects = [
            json!({}),
            json!({"metadata": {}}),
            json!({"spec": {}}),
            json!({"spec": {"containers": []}}),
            json!({"spec": {"containers": [{"name": "no-image"}]}}),
            pod(json!({"buildUrl": ""}), &[""]),
        ];

        for obj in objects {
            let outcome = mutator().handle(&request(obj.clone()));
            let patch = outcome.patch().unwrap_or_else(|| panic!("{obj} not patched"));
            let team = written_team(patch);
            assert!(
                matches!(team.as_deref(), Some("we") | Some("others")),
                "{obj} got {team:?}"
            );
        }
    }

    #[test]
    fn missing_node_selector_is_created() {
        let obj = json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {"name": "app"},
            "spec": {"containers": [{"image": "nginx"}]}
        });
        let outcome = mutator().handle(&request(obj));

        assert_eq!(
            outcome.patch().unwrap().0,
            vec![PatchOperation::Add {
                path: HINT_PATH.into(),
                value: json!({"cicd.devel/team": "others"}),
            }]
        );
    }

    #[test]
    fn existing_hint_is_replaced() {
        let obj = json!({
            "spec": {
                "containers": [{"image": "kube-build-base:1"}],
                "nodeSelector": {"cicd.devel/team": "others", "disktype": "ssd"}
            }
        });
        let outcome = mutator().handle(&request(obj));

        assert_eq!(
            outcome.patch().unwrap().0,
            vec![PatchOperation::Replace {
                path: HINT_KEY_PATH.into(),
                value: json!("we"),
            }]
        );
    }

    #[test]
    fn patch_touches_nothing_but_the_hint() {
        let obj = json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {
                "name": "app",
                "namespace": "ci",
                "uid": "1234",
                "labels": {"app": "web"},
                "annotations": {"buildUrl": "http://host/job/x/1/", "other": "1"},
                "ownerReferences": [{"kind": "ReplicaSet", "name": "rs"}]
            },
            "spec": {
                "containers": [
                    {"name": "a", "image": "nginx", "env": [{"name": "X", "value": "1"}]},
                    {"name": "b", "image": "redis", "ports": [{"containerPort": 6379}]}
                ],
                "initContainers": [{"name": "init", "image": "busybox"}],
                "nodeSelector": {"disktype": "ssd"},
                "tolerations": [{"key": "k", "operator": "Exists"}],
                "terminationGracePeriodSeconds": 30,
                "enableServiceLinks": true
            },
            "status": {"phase": "Pending"}
        });
        let patch = mutator().handle(&request(obj)).patch().cloned().unwrap();

        assert_eq!(patch.len(), 1);
        assert!(patch.iter().all(|op| op.path().starts_with(HINT_PATH)));
    }

    #[test]
    fn explicit_nulls_are_left_alone() {
        let obj = json!({
            "metadata": {"name": "a", "annotations": null},
            "spec": {"containers": [{"image": "nginx"}], "nodeSelector": {}}
        });
        let outcome = mutator().handle(&request(obj));
        assert_eq!(
            outcome.patch().unwrap().0,
            vec![PatchOperation::Add {
                path: HINT_KEY_PATH.into(),
                value: json!("others"),
            }]
        );

        let obj = json!({
            "kind": "Pod",
            "metadata": {"name": null, "namespace": null},
            "spec": {
                "containers": [{"name": null, "image": null}, {"image": "kube-build-base"}],
                "nodeSelector": {}
            }
        });
        let patch = mutator().handle(&request(obj)).patch().cloned().unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(written_team(&patch).as_deref(), Some("we"));

        let obj = json!({"spec": {"containers": null, "nodeSelector": {}}});
        let patch = mutator().handle(&request(obj)).patch().cloned().unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.iter().next().map(|op| op.path()), Some(HINT_KEY_PATH));
    }

    #[test]
    fn null_node_selector_is_replaced_with_the_hint() {
        let obj = json!({"spec": {"containers": [{"image": "nginx"}], "nodeSelector": null}});
        let outcome = mutator().handle(&request(obj));

        assert_eq!(
            outcome.patch().unwrap().0,
            vec![PatchOperation::Replace {
                path: HINT_PATH.into(),
                value: json!({"cicd.devel/team": "others"}),
            }]
        );
    }

    #[test]
    fn handling_is_repeatable() {
        let m = mutator();
        let req = request(pod(json!({}), &["kube-build-base"]));

        let first = m.handle(&req);
        let second = m.handle(&req);
        assert_eq!(first, second);
    }

    #[test]
    fn wrong_kind_is_bad_request() {
        let req = request(json!({"apiVersion": "apps/v1", "kind": "Deployment"}));
        let outcome = mutator().handle(&req);
        assert_eq!(outcome.status(), Some(AdmissionStatus::BadRequest));
    }

    #[test]
    fn review_wraps_outcome() {
        let m = mutator();

        let ok = m.review(&request(pod(json!({}), &["nginx"])));
        assert!(ok.allowed);
        assert_eq!(ok.uid, "uid-1");
        assert_eq!(ok.patch_type.as_deref(), Some("JSONPatch"));

        let bad = m.review(&AdmissionRequest::new("uid-9", &b"nope"[..]));
        assert!(!bad.allowed);
        assert_eq!(bad.uid, "uid-9");
        assert_eq!(bad.status.map(|s| s.code), Some(400));
    }

    #[test]
    fn identity_prefers_request_namespace_when_object_has_none() {
        let req = AdmissionRequest::new("u", Vec::new()).with_namespace("ci");
        let id = identity_of(&req, WorkloadIdentity::new("", "app"));
        assert_eq!(id.to_string(), "ci/app");

        let id = identity_of(&req, WorkloadIdentity::new("prod", "app"));
        assert_eq!(id.to_string(), "prod/app");
    }

    #[test]
    fn identity_takes_name_from_request_when_object_has_none() {
        let req = AdmissionRequest::new("u", Vec::new())
            .with_namespace("ci")
            .with_name("app-7f9c");
        let id = identity_of(&req, WorkloadIdentity::new("", ""));
        assert_eq!(id.to_string(), "ci/app-7f9c");

        let id = identity_of(&req, WorkloadIdentity::new("", "own"));
        assert_eq!(id.to_string(), "ci/own");
    }

    #[derive(Default)]
    struct Recording {
        classified: Mutex<Vec<(ClassificationLabel, String)>>,
        failures: Mutex<Vec<String>>,
        durations: Mutex<Vec<HandleResult>>,
    }

    impl MetricsBackend for Recording {
        fn record_classified(&self, label: ClassificationLabel, rule: &str) {
            self.classified.lock().unwrap().push((label, rule.to_string()));
        }

        fn record_failure(&self, error_kind: &str) {
            self.failures.lock().unwrap().push(error_kind.to_string());
        }

        fn record_duration(&self, result: HandleResult, _: Duration) {
            self.durations.lock().unwrap().push(result);
        }
    }

    #[test]
    fn metrics_are_recorded() {
        let rec = Arc::new(Recording::default());
        let m = mutator().with_metrics(rec.clone());

        m.handle(&request(pod(json!({}), &["kube-build-base"])));
        m.handle(&AdmissionRequest::new("bad", &b"{"[..]));

        assert_eq!(
            *rec.classified.lock().unwrap(),
            vec![(ClassificationLabel::TeamSelf, "image".to_string())]
        );
        assert_eq!(*rec.failures.lock().unwrap(), vec!["decode".to_string()]);
        assert_eq!(
            *rec.durations.lock().unwrap(),
            vec![HandleResult::Patched, HandleResult::Errored]
        );
    }

    #[test]
    fn mutator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PodMutator<JsonDecoder>>();
        assert_send_sync::<PodMutator<Arc<dyn Decoder>>>();
    }
}
