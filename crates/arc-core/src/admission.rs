//! Admission of runner resources.
//!
//! A runner is admitted when its document decodes, its kind is registered in the
//! scheme and its spec passes validation. The result is the [`EffectiveConfig`]
//! the reconciler works from. Spec edits are handled the same way as creations:
//! the new document is reviewed from scratch.
use arc_model::{Runner, Scheme};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::{defaults::RunnerDefaults, effective::EffectiveConfig, error::CoreError};

/// Validating and defaulting gate for runner documents.
#[derive(Debug, Clone)]
pub struct Admission {
    defaults: RunnerDefaults,
    scheme: Scheme,
}

impl Default for Admission {
    fn default() -> Self {
        Self::new(RunnerDefaults::default())
    }
}

impl Admission {
    /// Create a gate applying `defaults`, knowing the kinds of [`arc_model::scheme`].
    pub fn new(defaults: RunnerDefaults) -> Self {
        Self {
            defaults,
            scheme: arc_model::scheme(),
        }
    }

    /// Replace the scheme used to recognize incoming documents.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Review an already decoded runner.
    ///
    /// All validation failures are returned together in [`CoreError::Rejected`].
    #[instrument(level = "debug", skip(self, runner), fields(runner = %display_name(runner)))]
    pub fn review(&self, runner: &Runner) -> Result<EffectiveConfig, CoreError> {
        let name = display_name(runner);

        let errors = runner.validate();
        if !errors.is_empty() {
            warn!(errors = errors.len(), detail = %errors, "runner rejected");
            return Err(CoreError::Rejected { name, errors });
        }

        let effective = EffectiveConfig::resolve(&runner.spec.config, &self.defaults)?;
        info!(
            scope = %effective.scope,
            mode = %effective.container_mode,
            ephemeral = effective.ephemeral,
            "runner admitted"
        );
        Ok(effective)
    }

    /// Decode a runner document and review it.
    pub fn review_value(&self, doc: Value) -> Result<EffectiveConfig, CoreError> {
        let api_version = doc.get("apiVersion").and_then(Value::as_str).unwrap_or_default();
        let kind = doc.get("kind").and_then(Value::as_str).unwrap_or_default();

        if !self.scheme.recognizes(api_version, kind) {
            debug!(api_version, kind, "document kind not registered");
            return Err(CoreError::UnknownKind {
                api_version: api_version.to_string(),
                kind: kind.to_string(),
            });
        }

        let runner: Runner = serde_json::from_value(doc)?;
        self.review(&runner)
    }

    /// Parse a JSON runner document and review it.
    pub fn review_json(&self, doc: &str) -> Result<EffectiveConfig, CoreError> {
        let value: Value = serde_json::from_str(doc)?;
        self.review_value(value)
    }
}

/// `namespace/name` of the runner, for logs and errors.
fn display_name(runner: &Runner) -> String {
    let name = runner.metadata.name.as_deref().unwrap_or("<unnamed>");
    match runner.metadata.namespace.as_deref() {
        Some(ns) => format!("{ns}/{name}"),
        None => name.to_string(),
    }
}
