use std::{fmt, str::FromStr};

use crate::error::{ModelError, ModelResult};

/// Persistent volume access modes accepted for the runner work volume.
///
/// Kubernetes knows more modes (`ReadOnlyMany`, `ReadWriteOncePod`), but a work
/// directory must be writable and shareable by every container of the runner pod,
/// so only these two are admitted.
/// Names are matched exactly, the same way the API server does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessMode {
    ReadWriteOnce,
    ReadWriteMany,
}

impl AccessMode {
    /// Returns the Kubernetes spelling of the mode.
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccessMode::ReadWriteOnce => "ReadWriteOnce",
            AccessMode::ReadWriteMany => "ReadWriteMany",
        }
    }
}

impl FromStr for AccessMode {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            "ReadWriteOnce" => Ok(AccessMode::ReadWriteOnce),
            "ReadWriteMany" => Ok(AccessMode::ReadWriteMany),
            other => Err(ModelError::UnsupportedAccessMode(other.to_string())),
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
