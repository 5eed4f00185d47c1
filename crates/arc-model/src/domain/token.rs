use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Runner registration token issued by the build-coordination backend.
///
/// Serialized as a plain string. `Debug` never prints the secret.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RegistrationToken(String);

impl RegistrationToken {
    /// Wrap a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns `true` if no token has been issued.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the raw token.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RegistrationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("RegistrationToken(<empty>)")
        } else {
            f.write_str("RegistrationToken(<redacted>)")
        }
    }
}

impl From<&str> for RegistrationToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RegistrationToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::RegistrationToken;

    #[test]
    fn debug_hides_secret() {
        let token = RegistrationToken::new("AABBCC");
        let printed = format!("{token:?}");
        assert!(!printed.contains("AABBCC"));
        assert!(printed.contains("redacted"));
    }

    #[test]
    fn serde_transparent_string() {
        let token = RegistrationToken::new("t");
        assert_eq!(serde_json::to_string(&token).unwrap(), r#""t""#);

        let back: RegistrationToken = serde_json::from_str(r#""t""#).unwrap();
        assert_eq!(back.expose(), "t");
        assert!(!back.is_empty());
    }
}
