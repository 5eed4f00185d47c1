//! Ephemeral work volume requested by a runner.
//!
//! A [`WorkVolumeClaimTemplate`] is plain data as submitted by the user.
//! Pod descriptors can only be derived from a [`WorkVolume`], which is obtained by
//! validating the template, so an unchecked template never reaches the pod.
use k8s_openapi::api::core::v1::{
    EphemeralVolumeSource, PersistentVolumeClaimSpec, PersistentVolumeClaimTemplate, Volume,
    VolumeMount, VolumeResourceRequirements,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    de::null_as_default,
    domain::{AccessMode, WORK_VOLUME_NAME},
    error::{ModelError, ModelResult},
};

/// Claim template for the runner work directory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkVolumeClaimTemplate {
    /// Storage class used to provision the claim.
    #[serde(default)]
    pub storage_class_name: String,
    /// Requested access modes, in Kubernetes spelling.
    ///
    /// Kept as raw strings so that unsupported values can be reported by name.
    /// `null` reads as an empty list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_modes: Vec<String>,
    /// Storage requests and limits of the claim.
    #[serde(default)]
    pub resources: VolumeResourceRequirements,
}

impl WorkVolumeClaimTemplate {
    /// Check the template and return the validated view used for derivation.
    ///
    /// Fails on the first problem found: an empty mode list, or the first mode
    /// (in list order) that is not a supported [`AccessMode`].
    pub fn validate(&self) -> ModelResult<WorkVolume<'_>> {
        if self.access_modes.is_empty() {
            return Err(ModelError::NoAccessModes);
        }

        let access_modes = self
            .access_modes
            .iter()
            .map(|m| m.parse::<AccessMode>())
            .collect::<ModelResult<Vec<_>>>()?;

        Ok(WorkVolume {
            template: self,
            access_modes,
        })
    }
}

/// A [`WorkVolumeClaimTemplate`] that passed validation.
///
/// Borrowing the template keeps the derived descriptors tied to the exact
/// value that was checked; the descriptors themselves own copies of the data.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkVolume<'a> {
    template: &'a WorkVolumeClaimTemplate,
    access_modes: Vec<AccessMode>,
}

impl WorkVolume<'_> {
    /// Pod volume named [`WORK_VOLUME_NAME`] backed by an ephemeral claim.
    ///
    /// The claim copies access modes, storage class and resources verbatim.
    pub fn volume(&self) -> Volume {
        let access_modes = self
            .access_modes
            .iter()
            .map(|m| m.as_str().to_string())
            .collect();

        Volume {
            name: WORK_VOLUME_NAME.to_string(),
            ephemeral: Some(EphemeralVolumeSource {
                volume_claim_template: Some(PersistentVolumeClaimTemplate {
                    metadata: None,
                    spec: PersistentVolumeClaimSpec {
                        access_modes: Some(access_modes),
                        storage_class_name: Some(self.template.storage_class_name.clone()),
                        resources: Some(self.template.resources.clone()),
                        ..Default::default()
                    },
                }),
            }),
            ..Default::default()
        }
    }

    /// Mount of the work volume at `mount_path`.
    pub fn volume_mount(&self, mount_path: impl Into<String>) -> VolumeMount {
        VolumeMount {
            name: WORK_VOLUME_NAME.to_string(),
            mount_path: mount_path.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

    use super::*;

    fn template(modes: &[&str]) -> WorkVolumeClaimTemplate {
        WorkVolumeClaimTemplate {
            storage_class_name: "fast-ssd".into(),
            access_modes: modes.iter().map(|m| m.to_string()).collect(),
            resources: VolumeResourceRequirements {
                requests: Some(BTreeMap::from([(
                    "storage".to_string(),
                    Quantity("10Gi".to_string()),
                )])),
                ..Default::default()
            },
        }
    }

    #[test]
    fn empty_access_modes_are_rejected() {
        let err = template(&[]).validate().unwrap_err();
        assert_eq!(err, ModelError::NoAccessModes);
        assert_eq!(err.to_string(), "at least one access mode must be specified");
    }

    #[test]
    fn null_and_missing_access_modes_count_as_empty() {
        for text in [
            r#"{"storageClassName":"s","accessModes":null,"resources":{}}"#,
            r#"{"storageClassName":"s","resources":{}}"#,
        ] {
            let t: WorkVolumeClaimTemplate = serde_json::from_str(text).unwrap();
            assert_eq!(t.validate().unwrap_err(), ModelError::NoAccessModes, "{text}");
        }
    }

    #[test]
    fn unsupported_access_mode_is_named() {
        let err = template(&["ReadWriteOnce", "ReadOnlyMany"]).validate().unwrap_err();
        assert_eq!(err, ModelError::UnsupportedAccessMode("ReadOnlyMany".into()));
        assert!(err.to_string().contains("ReadOnlyMany"));
    }

    #[test]
    fn first_unsupported_mode_wins() {
        let err = template(&["ReadWriteOncePod", "ReadOnlyMany"]).validate().unwrap_err();
        assert_eq!(err, ModelError::UnsupportedAccessMode("ReadWriteOncePod".into()));
    }

    #[test]
    fn supported_modes_validate() {
        let t = template(&["ReadWriteOnce"]);
        let work = t.validate().unwrap();
        assert_eq!(work.access_modes, vec![AccessMode::ReadWriteOnce]);

        let t = template(&["ReadWriteMany", "ReadWriteOnce"]);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn volume_copies_template_fields() {
        let t = template(&["ReadWriteOnce"]);
        let volume = t.validate().unwrap().volume();

        assert_eq!(volume.name, "work");
        let claim = volume
            .ephemeral
            .and_then(|e| e.volume_claim_template)
            .expect("ephemeral claim template");
        assert_eq!(claim.spec.access_modes, Some(vec!["ReadWriteOnce".to_string()]));
        assert_eq!(claim.spec.storage_class_name.as_deref(), Some("fast-ssd"));
        assert_eq!(claim.spec.resources, Some(t.resources.clone()));
    }

    #[test]
    fn empty_storage_class_is_still_set() {
        let mut t = template(&["ReadWriteMany"]);
        t.storage_class_name.clear();
        let volume = t.validate().unwrap().volume();
        let claim = volume.ephemeral.unwrap().volume_claim_template.unwrap();
        assert_eq!(claim.spec.storage_class_name.as_deref(), Some(""));
    }

    #[test]
    fn mount_binds_work_volume_to_path() {
        let t = template(&["ReadWriteOnce"]);
        let mount = t.validate().unwrap().volume_mount("/runner/_work");

        assert_eq!(mount.name, "work");
        assert_eq!(mount.mount_path, "/runner/_work");
        assert_eq!(mount.read_only, None);
    }

    #[test]
    fn derivation_is_deterministic() {
        let t = template(&["ReadWriteOnce"]);
        let work = t.validate().unwrap();
        assert_eq!(work.volume(), work.volume());
        assert_eq!(work.volume_mount("/w"), work.volume_mount("/w"));
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_value(template(&["ReadWriteOnce"])).unwrap();
        assert_eq!(json["storageClassName"], "fast-ssd");
        assert_eq!(json["accessModes"][0], "ReadWriteOnce");
        assert_eq!(json["resources"]["requests"]["storage"], "10Gi");
    }
}
