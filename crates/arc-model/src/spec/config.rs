use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    de::null_as_default,
    domain::{ContainerMode, Scope, Toggle},
    error::ModelResult,
    volume::WorkVolumeClaimTemplate,
};

/// Ownership and behavior of a runner.
///
/// Covers:
/// - the registration scope (`enterprise` / `organization` / `repository`, exactly one)
/// - how the runner advertises itself (`labels`, `group`)
/// - lifecycle and Docker wiring (`ephemeral`, `docker*`, `volume*`)
/// - the container mode and, for `kubernetes`, the work volume claim template
///
/// The three scope fields are kept separate on the wire; use [`RunnerConfig::scope`]
/// to get the checked [`Scope`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunnerConfig {
    /// Enterprise to register the runner with.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[schemars(regex(pattern = r"^[^/]+$"))]
    pub enterprise: String,

    /// Organization to register the runner with.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[schemars(regex(pattern = r"^[^/]+$"))]
    pub organization: String,

    /// Repository to register the runner with, as `OWNER/NAME`.
    ///
    /// The runner only executes jobs of this repository.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[schemars(regex(pattern = r"^[^/]+/[^/]+$"))]
    pub repository: String,

    /// Labels advertised by the runner. Order is kept, duplicates are allowed.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    /// Runner group to join. The group must already exist on the backend.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,

    /// Replace the runner after every job. Unset means enabled.
    #[serde(default, skip_serializing_if = "Toggle::is_unset")]
    pub ephemeral: Toggle,

    /// Runner container image.
    #[serde(default)]
    pub image: String,

    /// Working directory of the runner. Empty means `/runner/_work`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub work_dir: String,

    /// Run dockerd inside the runner container instead of a sidecar. Unset means disabled.
    #[serde(default, skip_serializing_if = "Toggle::is_unset")]
    pub dockerd_within_runner_container: Toggle,

    /// Provide Docker to jobs at all. Unset means enabled.
    #[serde(default, skip_serializing_if = "Toggle::is_unset")]
    pub docker_enabled: Toggle,

    #[serde(rename = "dockerMTU", default, skip_serializing_if = "Option::is_none")]
    pub docker_mtu: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_registry_mirror: Option<String>,

    /// Size limit of the runner work directory volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_size_limit: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_storage_medium: Option<StorageMedium>,

    /// Where job containers run. `kubernetes` requires `workVolumeClaimTemplate`.
    #[serde(default, skip_serializing_if = "ContainerMode::is_docker")]
    pub container_mode: ContainerMode,

    /// Ephemeral claim backing the work directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_volume_claim_template: Option<WorkVolumeClaimTemplate>,

    /// Secret holding the backend API credentials for this runner.
    #[serde(
        rename = "githubAPICredentialsFrom",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub github_api_credentials_from: Option<GitHubApiCredentialsFrom>,
}

impl RunnerConfig {
    /// Checked registration scope.
    pub fn scope(&self) -> ModelResult<Scope> {
        Scope::from_fields(&self.enterprise, &self.organization, &self.repository)
    }
}

/// Storage medium of the runner work directory volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum StorageMedium {
    Memory,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitHubApiCredentialsFrom {
    #[serde(default)]
    pub secret_ref: SecretReference,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SecretReference {
    pub name: String,
}
