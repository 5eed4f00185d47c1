use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `EnvFilter` expression, e.g. `"info"` or `"arc_core=trace,warn"`.
///
/// The raw string is kept so the config serializes back to what was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Validate `s` as a filter expression.
    ///
    /// # Examples
    /// ```
    /// use arc_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("arc_core=debug,info").unwrap();
    /// assert_eq!(lvl.as_str(), "arc_core=debug,info");
    /// assert!(LoggerLevel::new("arc_core=loud").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    /// Returns the filter exactly as it was written.
    ///
    /// # Examples
    /// ```
    /// use arc_observe::LoggerLevel;
    ///
    /// let lvl = "warn".parse::<LoggerLevel>().unwrap();
    /// assert_eq!(lvl.as_str(), "warn");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the filter. Falls back to `info` if the directive no longer parses.
    ///
    /// # Examples
    /// ```
    /// use arc_observe::LoggerLevel;
    ///
    /// let lvl = "arc_model=trace,info".parse::<LoggerLevel>().unwrap();
    /// let _ = lvl.to_env_filter();
    /// ```
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.0).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(filter: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&filter) {
            Ok(_) => Ok(Self(filter)),
            Err(e) => Err(LoggerError::InvalidLevel {
                reason: e.to_string(),
                filter,
            }),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_levels_and_directives() {
        for lvl in ["info", "warn", "trace", "arc_core=debug,info", "arc_model=trace"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "{lvl} should parse");
        }
    }

    #[test]
    fn rejects_bad_directives() {
        for lvl in ["arc_core=loud", "a=trace,b=wat"] {
            assert!(lvl.parse::<LoggerLevel>().is_err(), "{lvl} should fail");
        }
    }

    #[test]
    fn default_is_info() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _ = lvl.to_env_filter();
    }

    #[test]
    fn new_matches_parse() {
        let a = LoggerLevel::new("warn").unwrap();
        let b: LoggerLevel = "warn".parse().unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn serde_keeps_raw_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""arc_core=debug,info""#).unwrap();
        assert_eq!(lvl.as_str(), "arc_core=debug,info");
        assert_eq!(
            serde_json::to_string(&lvl).unwrap(),
            r#""arc_core=debug,info""#
        );
    }
}
