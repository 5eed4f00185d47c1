use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::FieldPath;

/// Single validation failure attached to a field path.
///
/// Rendered the way the API server reports invalid fields:
/// `spec.repository: Invalid value: "acme/app": <detail>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub path: FieldPath,
    /// Offending value as it appears in the document (`null` if absent).
    pub value: Value,
    pub detail: String,
}

impl FieldError {
    /// The value at `path` is invalid. `value` is captured as a JSON snapshot.
    pub fn invalid<V>(path: FieldPath, value: &V, detail: impl Into<String>) -> Self
    where
        V: Serialize + ?Sized,
    {
        Self {
            path,
            value: serde_json::to_value(value).unwrap_or(Value::Null),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Invalid value: {}", self.path, self.value)?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

/// Ordered list of validation failures.
///
/// Order follows the order in which rules were evaluated.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, err: FieldError) {
        self.0.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Returns the rendered paths of all errors, in order.
    pub fn paths(&self) -> Vec<String> {
        self.0.iter().map(|e| e.path.to_string()).collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_renders_value_and_detail() {
        let err = FieldError::invalid(
            FieldPath::new("spec").child("repository"),
            "acme/app",
            "enterprise, organization, repository are mutually exclusive",
        );
        assert_eq!(
            err.to_string(),
            r#"spec.repository: Invalid value: "acme/app": enterprise, organization, repository are mutually exclusive"#
        );
    }

    #[test]
    fn absent_value_renders_null() {
        let err = FieldError::invalid(
            FieldPath::new("workVolumeClaimTemplate"),
            &None::<String>,
            "required",
        );
        assert_eq!(err.value, Value::Null);
        assert_eq!(err.to_string(), "workVolumeClaimTemplate: Invalid value: null: required");
    }

    #[test]
    fn list_display_joins_entries() {
        let mut errs = FieldErrors::new();
        errs.push(FieldError::invalid(FieldPath::new("a"), "1", "x"));
        errs.push(FieldError::invalid(FieldPath::new("b"), "2", ""));
        assert_eq!(
            errs.to_string(),
            r#"a: Invalid value: "1": x; b: Invalid value: "2""#
        );
        assert_eq!(errs.paths(), vec!["a", "b"]);
    }

    #[test]
    fn serializes_as_array_of_records() {
        let mut errs = FieldErrors::new();
        errs.push(FieldError::invalid(FieldPath::new("repository"), "", "boom"));
        let json = serde_json::to_value(&errs).unwrap();

        assert_eq!(json[0]["path"], "repository");
        assert_eq!(json[0]["value"], "");
        assert_eq!(json[0]["detail"], "boom");
    }
}
