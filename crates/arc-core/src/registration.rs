use arc_model::{Eligibility, Runner};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};

/// Registration eligibility checks against an injected [`Clock`].
///
/// The clock is read once per check, so every rule of one evaluation sees the same instant.
#[derive(Debug, Clone, Default)]
pub struct RegistrationCheck<C = SystemClock> {
    clock: C,
}

impl RegistrationCheck<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> RegistrationCheck<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Verdict for `runner`, with the deciding rule.
    pub fn eligibility(&self, runner: &Runner) -> Eligibility {
        let now = self.clock.now();
        let verdict = runner.registration_at(now);

        match verdict {
            Eligibility::Registerable => trace!(
                runner = runner.metadata.name.as_deref().unwrap_or_default(),
                "registration reusable"
            ),
            _ => debug!(
                runner = runner.metadata.name.as_deref().unwrap_or_default(),
                verdict = %verdict,
                %now,
                "registration not reusable"
            ),
        }
        verdict
    }

    /// Whether the registration recorded in the runner status can be reused.
    pub fn is_registerable(&self, runner: &Runner) -> bool {
        self.eligibility(runner).is_registerable()
    }
}
