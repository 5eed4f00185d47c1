use std::fmt;

use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{de::null_as_default, domain::RegistrationToken};

/// Observed state of a runner. Written by the reconciler only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunnerStatus {
    /// `true` only while the runner pod is ready.
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub registration: RunnerStatusRegistration,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_registration_check_time: Option<Time>,
}

/// Registration recorded for the runner by the reconciler.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunnerStatusRegistration {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub enterprise: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub organization: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub token: RegistrationToken,
    /// Token expiry. `None` means no token was ever issued.
    #[serde(default)]
    pub expires_at: Option<Time>,
}

impl RunnerStatusRegistration {
    /// Decide whether this registration is still usable for a runner scoped to `repository`.
    ///
    /// Checks, in order: repository match, token presence, expiry strictly after `now`.
    pub fn eligibility_at(&self, repository: &str, now: DateTime<Utc>) -> Eligibility {
        if self.repository != repository {
            return Eligibility::ScopeMismatch;
        }
        if self.token.is_empty() {
            return Eligibility::MissingToken;
        }
        match &self.expires_at {
            Some(Time(expires_at)) if *expires_at > now => Eligibility::Registerable,
            _ => Eligibility::Expired,
        }
    }
}

/// Outcome of the registration eligibility check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Eligibility {
    /// The recorded registration can be reused.
    Registerable,
    /// The runner has no status yet.
    Unobserved,
    /// The registration belongs to a different repository.
    ScopeMismatch,
    /// No token was recorded.
    MissingToken,
    /// The token expired, or carries no expiry.
    Expired,
}

impl Eligibility {
    pub const fn is_registerable(self) -> bool {
        matches!(self, Eligibility::Registerable)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Eligibility::Registerable => "registerable",
            Eligibility::Unobserved => "unobserved",
            Eligibility::ScopeMismatch => "scope-mismatch",
            Eligibility::MissingToken => "missing-token",
            Eligibility::Expired => "expired",
        }
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
