//! Admission boundary for runner resources.
//!
//! Turns submitted runner documents into checked, fully defaulted
//! configurations, and answers registration-eligibility queries against an
//! injected clock. Every decision is logged through `tracing`.
pub mod admission;
pub mod clock;
pub mod defaults;
pub mod effective;
pub mod error;
pub mod registration;

pub mod prelude {
    pub use crate::admission::Admission;
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::defaults::RunnerDefaults;
    pub use crate::effective::{EffectiveConfig, WorkVolumeMount};
    pub use crate::error::CoreError;
    pub use crate::registration::RegistrationCheck;
}
