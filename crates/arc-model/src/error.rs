use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("must specify exactly one of enterprise, organization, repository")]
    MissingScope,

    #[error("enterprise, organization, repository are mutually exclusive")]
    AmbiguousScope(usize),

    #[error("workVolumeClaimTemplate is required when containerMode is kubernetes")]
    MissingWorkVolumeClaimTemplate,

    #[error("at least one access mode must be specified")]
    NoAccessModes,

    #[error("access mode {0} is not supported")]
    UnsupportedAccessMode(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
