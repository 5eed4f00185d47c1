//! Field-path tagged validation errors.
//!
//! Errors point at the offending field with a dotted path (`spec.repository`,
//! `spec.workVolumeClaimTemplate`) so that every violation can be reported at once.
mod path;
pub use path::FieldPath;

mod error;
pub use error::{FieldError, FieldErrors};
