//! Runner resource model.
//!
//! Declarative description of a self-hosted build runner, the cross-field
//! validation applied before the description is acted upon, and the pure
//! derivations the reconciler needs (work volume descriptors, registration
//! eligibility). Nothing in this crate performs I/O.
mod domain;
pub use domain::{AccessMode, ContainerMode, RegistrationToken, Scope, Toggle};
pub use domain::{API_GROUP, API_VERSION, DEFAULT_WORK_DIR, WORK_VOLUME_NAME};

mod de;

mod error;
pub use error::{ModelError, ModelResult};

mod field;
pub use field::{FieldError, FieldErrors, FieldPath};

mod spec;
pub use spec::{
    GitHubApiCredentialsFrom, Runner, RunnerConfig, RunnerPodSpec, RunnerSpec, SecretReference,
    StorageMedium,
};

mod status;
pub use status::{Eligibility, RunnerStatus, RunnerStatusRegistration};

mod volume;
pub use volume::{WorkVolume, WorkVolumeClaimTemplate};

mod scheme;
pub use scheme::{add_to_scheme, scheme, Scheme};
