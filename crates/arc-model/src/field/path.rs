use std::fmt;

use serde::{Serialize, Serializer};

/// Path to a field inside a resource document.
///
/// Paths are immutable: [`FieldPath::child`] returns an extended copy, so one
/// parent can be shared by several checks.
#[derive(Default, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Empty path; children of the root render without a prefix.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path with a single top-level field.
    pub fn new(name: impl Into<String>) -> Self {
        Self::root().child(name)
    }

    /// Path to a named field below this one.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl Serialize for FieldPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
