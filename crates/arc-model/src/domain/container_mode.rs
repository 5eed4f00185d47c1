use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How job containers are started inside the runner pod.
///
/// - `Docker`: jobs talk to a Docker daemon (sidecar or in-container dind).
///   Written as an empty string or an absent field.
/// - `Kubernetes`: container steps are delegated to the cluster, no privileged
///   daemon is needed. Requires a work volume claim template.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ContainerMode {
    #[default]
    #[serde(rename = "")]
    Docker,
    #[serde(rename = "kubernetes")]
    Kubernetes,
}

impl ContainerMode {
    pub const fn is_docker(&self) -> bool {
        matches!(self, ContainerMode::Docker)
    }

    pub const fn is_kubernetes(&self) -> bool {
        matches!(self, ContainerMode::Kubernetes)
    }
}

/// Human-readable name for logs: `docker` or `kubernetes`.
///
/// Differs from the wire value for Docker, which is written as an empty string.
impl fmt::Display for ContainerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerMode::Docker => f.write_str("docker"),
            ContainerMode::Kubernetes => f.write_str("kubernetes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_docker() {
        assert!(ContainerMode::default().is_docker());
    }

    #[test]
    fn display_names_docker_while_wire_value_is_empty() {
        assert_eq!(ContainerMode::Docker.to_string(), "docker");
        assert_eq!(serde_json::to_string(&ContainerMode::Docker).unwrap(), r#""""#);
        assert_eq!(ContainerMode::Kubernetes.to_string(), "kubernetes");
    }

    #[test]
    fn serde_uses_wire_values() {
        assert_eq!(
            serde_json::to_string(&ContainerMode::Kubernetes).unwrap(),
            r#""kubernetes""#
        );
        let mode: ContainerMode = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(mode, ContainerMode::Docker);
        assert!(serde_json::from_str::<ContainerMode>(r#""docker""#).is_err());
    }
}
