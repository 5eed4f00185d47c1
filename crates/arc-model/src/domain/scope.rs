use std::fmt;

use crate::error::{ModelError, ModelResult};

/// Ownership boundary a runner is registered against.
///
/// The resource carries the scope as three independent strings
/// (`enterprise`, `organization`, `repository`); `Scope` is the in-memory form
/// that can only hold one of them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Enterprise slug.
    Enterprise(String),
    /// Organization login.
    Organization(String),
    /// Repository in `OWNER/NAME` form.
    Repository(String),
}

impl Scope {
    /// Build a scope from the wire fields. Empty strings count as not set.
    ///
    /// Fails with [`ModelError::MissingScope`] when nothing is set and with
    /// [`ModelError::AmbiguousScope`] when more than one field is set.
    pub fn from_fields(enterprise: &str, organization: &str, repository: &str) -> ModelResult<Self> {
        let mut found: Vec<Scope> = [
            (!organization.is_empty()).then(|| Scope::Organization(organization.to_owned())),
            (!repository.is_empty()).then(|| Scope::Repository(repository.to_owned())),
            (!enterprise.is_empty()).then(|| Scope::Enterprise(enterprise.to_owned())),
        ]
        .into_iter()
        .flatten()
        .collect();

        match found.len() {
            0 => Err(ModelError::MissingScope),
            1 => Ok(found.remove(0)),
            n => Err(ModelError::AmbiguousScope(n)),
        }
    }

    /// Returns the scope kind as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            Scope::Enterprise(_) => "enterprise",
            Scope::Organization(_) => "organization",
            Scope::Repository(_) => "repository",
        }
    }

    /// Returns the scoped name (enterprise, organization or `OWNER/NAME`).
    pub fn name(&self) -> &str {
        match self {
            Scope::Enterprise(n) | Scope::Organization(n) | Scope::Repository(n) => n,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.name())
    }
}
