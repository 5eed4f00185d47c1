use chrono::{DateTime, Utc};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    field::{FieldErrors, FieldPath},
    status::{Eligibility, RunnerStatus},
};

use super::{RunnerConfig, RunnerPodSpec};

/// Desired state of a runner: behavior plus pod shape.
///
/// Both halves are flattened into one object on the wire.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "actions.summerwind.dev",
    version = "v1alpha1",
    kind = "Runner",
    singular = "runner",
    plural = "runners",
    status = "RunnerStatus",
    derive = "PartialEq",
    namespaced
)]
#[kube(printcolumn = r#"{"name":"Enterprise","type":"string","jsonPath":".spec.enterprise"}"#)]
#[kube(printcolumn = r#"{"name":"Organization","type":"string","jsonPath":".spec.organization"}"#)]
#[kube(printcolumn = r#"{"name":"Repository","type":"string","jsonPath":".spec.repository"}"#)]
#[kube(printcolumn = r#"{"name":"Labels","type":"string","jsonPath":".spec.labels"}"#)]
#[kube(printcolumn = r#"{"name":"Status","type":"string","jsonPath":".status.phase"}"#)]
#[kube(printcolumn = r#"{"name":"Message","type":"string","jsonPath":".status.message"}"#)]
#[kube(printcolumn = r#"{"name":"Age","type":"date","jsonPath":".metadata.creationTimestamp"}"#)]
pub struct RunnerSpec {
    #[serde(flatten)]
    pub config: RunnerConfig,
    #[serde(flatten)]
    pub pod: RunnerPodSpec,
}

impl RunnerSpec {
    /// Validate the runner `spec`; paths are reported below `root`.
    pub fn validate(&self, root: &FieldPath) -> FieldErrors {
        self.config.validate(root)
    }
}

impl Runner {
    /// Validate the runner `spec` with paths rooted at `spec`.
    pub fn validate(&self) -> FieldErrors {
        self.spec.validate(&FieldPath::new("spec"))
    }

    /// Whether the recorded registration can be reused for this runner right now.
    ///
    /// The clock is read once per call.
    pub fn is_registerable(&self) -> bool {
        self.is_registerable_at(Utc::now())
    }

    /// Same as [`Runner::is_registerable`] against a caller-provided instant.
    pub fn is_registerable_at(&self, now: DateTime<Utc>) -> bool {
        self.registration_at(now).is_registerable()
    }

    /// Eligibility verdict, including the rule that decided it.
    ///
    /// Only the repository scope is compared; a registration recorded for another
    /// enterprise or organization is not detected here.
    pub fn registration_at(&self, now: DateTime<Utc>) -> Eligibility {
        match &self.status {
            None => Eligibility::Unobserved,
            Some(status) => status
                .registration
                .eligibility_at(&self.spec.config.repository, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use kube::CustomResourceExt;

    use super::*;
    use crate::{ContainerMode, Toggle};

    const MANIFEST: &str = r#"{
        "apiVersion": "actions.summerwind.dev/v1alpha1",
        "kind": "Runner",
        "metadata": {"name": "build-1", "namespace": "ci"},
        "spec": {
            "repository": "acme/app",
            "labels": ["linux", "x64"],
            "ephemeral": true,
            "image": "summerwind/actions-runner:latest",
            "containerMode": "kubernetes",
            "workVolumeClaimTemplate": {
                "storageClassName": "standard",
                "accessModes": ["ReadWriteOnce"],
                "resources": {"requests": {"storage": "1Gi"}}
            },
            "nodeSelector": {"kubernetes.io/os": "linux"},
            "containers": [{"name": "runner", "image": "summerwind/actions-runner:latest"}]
        }
    }"#;

    #[test]
    fn manifest_decodes_into_both_halves() {
        let runner: Runner = serde_json::from_str(MANIFEST).unwrap();

        assert_eq!(runner.metadata.name.as_deref(), Some("build-1"));
        assert_eq!(runner.spec.config.repository, "acme/app");
        assert_eq!(runner.spec.config.ephemeral, Toggle::Enabled);
        assert_eq!(runner.spec.config.container_mode, ContainerMode::Kubernetes);
        assert_eq!(runner.spec.pod.containers.len(), 1);
        assert_eq!(
            runner.spec.pod.node_selector.get("kubernetes.io/os").map(String::as_str),
            Some("linux")
        );
        assert!(runner.status.is_none());
        assert!(runner.validate().is_empty());
    }

    #[test]
    fn spec_serializes_flat() {
        let runner: Runner = serde_json::from_str(MANIFEST).unwrap();
        let json = serde_json::to_value(&runner).unwrap();

        assert_eq!(json["spec"]["repository"], "acme/app");
        assert_eq!(json["spec"]["containers"][0]["name"], "runner");
        assert!(json["spec"].get("config").is_none());
        assert!(json["spec"].get("pod").is_none());
    }

    #[test]
    fn runner_validate_roots_paths_at_spec() {
        let runner = Runner::new("build-1", RunnerSpec::default());
        assert_eq!(runner.validate().paths(), vec!["spec.repository"]);
    }

    #[test]
    fn resource_names() {
        assert_eq!(Runner::crd_name(), "runners.actions.summerwind.dev");
    }
}
