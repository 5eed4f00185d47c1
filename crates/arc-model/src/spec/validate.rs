use crate::{
    error::{ModelError, ModelResult},
    field::{FieldError, FieldErrors, FieldPath},
};

use super::RunnerConfig;

impl RunnerConfig {
    /// Check cross-field rules and return every violation found.
    ///
    /// Rules, all evaluated:
    /// - exactly one of `enterprise`, `organization`, `repository` is set;
    ///   reported on `<root>.repository` whichever fields are involved
    /// - `containerMode: kubernetes` requires a valid `workVolumeClaimTemplate`;
    ///   reported on `<root>.workVolumeClaimTemplate`
    ///
    /// The scope error, if any, comes first.
    pub fn validate(&self, root: &FieldPath) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if let Err(err) = self.scope() {
            errors.push(FieldError::invalid(
                root.child("repository"),
                self.repository.as_str(),
                err.to_string(),
            ));
        }

        if let Err(err) = self.validate_work_volume_claim_template() {
            errors.push(FieldError::invalid(
                root.child("workVolumeClaimTemplate"),
                &self.work_volume_claim_template,
                err.to_string(),
            ));
        }

        errors
    }

    fn validate_work_volume_claim_template(&self) -> ModelResult<()> {
        if !self.container_mode.is_kubernetes() {
            return Ok(());
        }

        match &self.work_volume_claim_template {
            None => Err(ModelError::MissingWorkVolumeClaimTemplate),
            Some(template) => template.validate().map(|_| ()),
        }
    }
}
