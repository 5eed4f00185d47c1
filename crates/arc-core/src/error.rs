use arc_model::{FieldErrors, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("runner {name} rejected: {errors}")]
    Rejected { name: String, errors: FieldErrors },

    #[error("unknown resource kind {kind:?} in {api_version:?}")]
    UnknownKind { api_version: String, kind: String },

    #[error("cannot decode runner document: {0}")]
    Decode(String),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Decode(e.to_string())
    }
}

impl CoreError {
    /// Field errors of a rejection, if this is one.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CoreError::Rejected { errors, .. } => Some(errors),
            _ => None,
        }
    }
}
