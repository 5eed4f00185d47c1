use k8s_openapi::api::core::v1::{Volume, VolumeMount};

use arc_model::{ContainerMode, ModelError, ModelResult, RunnerConfig, Scope};

use crate::defaults::RunnerDefaults;

/// Work volume descriptors ready to be placed into the runner pod.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkVolumeMount {
    pub volume: Volume,
    pub mount: VolumeMount,
}

/// Runner configuration with every optional setting decided.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig {
    pub scope: Scope,
    pub labels: Vec<String>,
    pub group: Option<String>,
    pub ephemeral: bool,
    pub docker_enabled: bool,
    pub dockerd_within_runner_container: bool,
    pub work_dir: String,
    pub container_mode: ContainerMode,
    /// Present in `kubernetes` container mode only.
    pub work_volume: Option<WorkVolumeMount>,
}

impl EffectiveConfig {
    /// Apply `defaults` to the unset parts of `config`.
    ///
    /// In `kubernetes` container mode Docker is switched off whatever the toggles
    /// say, and the work volume is derived from the claim template and mounted at
    /// the effective work directory.
    pub fn resolve(config: &RunnerConfig, defaults: &RunnerDefaults) -> ModelResult<Self> {
        let scope = config.scope()?;

        let work_dir = if config.work_dir.is_empty() {
            defaults.work_dir.clone()
        } else {
            config.work_dir.clone()
        };

        let kubernetes = config.container_mode.is_kubernetes();

        let work_volume = match (&config.work_volume_claim_template, kubernetes) {
            (Some(template), true) => {
                let work = template.validate()?;
                Some(WorkVolumeMount {
                    volume: work.volume(),
                    mount: work.volume_mount(work_dir.as_str()),
                })
            }
            (None, true) => return Err(ModelError::MissingWorkVolumeClaimTemplate),
            (_, false) => None,
        };

        Ok(Self {
            scope,
            labels: config.labels.clone(),
            group: (!config.group.is_empty()).then(|| config.group.clone()),
            ephemeral: config.ephemeral.resolve(defaults.ephemeral),
            docker_enabled: !kubernetes && config.docker_enabled.resolve(defaults.docker_enabled),
            dockerd_within_runner_container: !kubernetes
                && config
                    .dockerd_within_runner_container
                    .resolve(defaults.dockerd_within_runner_container),
            work_dir,
            container_mode: config.container_mode,
            work_volume,
        })
    }
}

#[cfg(test)]
mod tests {
    use arc_model::{Toggle, WorkVolumeClaimTemplate};

    use super::*;

    fn repo() -> RunnerConfig {
        RunnerConfig {
            repository: "acme/app".into(),
            ..Default::default()
        }
    }

    #[test]
    fn unset_toggles_take_defaults() {
        let eff = EffectiveConfig::resolve(&repo(), &RunnerDefaults::default()).unwrap();

        assert_eq!(eff.scope, Scope::Repository("acme/app".into()));
        assert!(eff.ephemeral);
        assert!(eff.docker_enabled);
        assert!(!eff.dockerd_within_runner_container);
        assert_eq!(eff.work_dir, "/runner/_work");
        assert_eq!(eff.group, None);
        assert!(eff.work_volume.is_none());
    }

    #[test]
    fn explicit_values_win_over_defaults() {
        let cfg = RunnerConfig {
            ephemeral: Toggle::Disabled,
            docker_enabled: Toggle::Disabled,
            dockerd_within_runner_container: Toggle::Enabled,
            work_dir: "/work".into(),
            group: "builders".into(),
            ..repo()
        };
        let eff = EffectiveConfig::resolve(&cfg, &RunnerDefaults::default()).unwrap();

        assert!(!eff.ephemeral);
        assert!(!eff.docker_enabled);
        assert!(eff.dockerd_within_runner_container);
        assert_eq!(eff.work_dir, "/work");
        assert_eq!(eff.group.as_deref(), Some("builders"));
    }

    #[test]
    fn custom_defaults_apply() {
        let defaults = RunnerDefaults {
            ephemeral: false,
            ..Default::default()
        };
        let eff = EffectiveConfig::resolve(&repo(), &defaults).unwrap();
        assert!(!eff.ephemeral);
    }

    #[test]
    fn kubernetes_mode_mounts_work_volume_at_work_dir() {
        let cfg = RunnerConfig {
            container_mode: ContainerMode::Kubernetes,
            docker_enabled: Toggle::Enabled,
            work_dir: "/home/runner/_work".into(),
            work_volume_claim_template: Some(WorkVolumeClaimTemplate {
                storage_class_name: "standard".into(),
                access_modes: vec!["ReadWriteOnce".into()],
                ..Default::default()
            }),
            ..repo()
        };
        let eff = EffectiveConfig::resolve(&cfg, &RunnerDefaults::default()).unwrap();

        assert!(!eff.docker_enabled);
        assert!(!eff.dockerd_within_runner_container);
        let work = eff.work_volume.expect("work volume");
        assert_eq!(work.volume.name, "work");
        assert_eq!(work.mount.name, "work");
        assert_eq!(work.mount.mount_path, "/home/runner/_work");
    }

    #[test]
    fn docker_mode_ignores_template() {
        let cfg = RunnerConfig {
            work_volume_claim_template: Some(WorkVolumeClaimTemplate::default()),
            ..repo()
        };
        let eff = EffectiveConfig::resolve(&cfg, &RunnerDefaults::default()).unwrap();
        assert!(eff.work_volume.is_none());
    }

    #[test]
    fn unresolvable_config_fails() {
        let err = EffectiveConfig::resolve(&RunnerConfig::default(), &RunnerDefaults::default())
            .unwrap_err();
        assert_eq!(err, ModelError::MissingScope);

        let cfg = RunnerConfig {
            container_mode: ContainerMode::Kubernetes,
            ..repo()
        };
        let err = EffectiveConfig::resolve(&cfg, &RunnerDefaults::default()).unwrap_err();
        assert_eq!(err, ModelError::MissingWorkVolumeClaimTemplate);
    }
}
