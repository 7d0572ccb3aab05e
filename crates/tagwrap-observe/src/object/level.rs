use std::{convert::TryFrom, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::LoggerError;

/// Default filter: scan output goes to stdout, so only problems reach stderr.
const DEFAULT_LEVEL: &str = "warn";

/// Validated `EnvFilter` expression.
///
/// Stores the raw string so it can be written back to config unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// # Examples
    /// ```
    /// use tagwrap_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("tagwrap_core=debug,warn").unwrap();
    /// assert_eq!(lvl.as_str(), "tagwrap_core=debug,warn");
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the filter. Always succeeds for a constructed level.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).expect("LoggerLevel is validated on construction")
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self(DEFAULT_LEVEL.to_string())
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
    fn try_from(s: String) -> Result<Self, Self::Error> {
        EnvFilter::try_new(&s)
            .map(|_| LoggerLevel(s.clone()))
            .map_err(|e| LoggerError::InvalidLevel(format!("{s}: {e}")))
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_filters() {
        for lvl in ["warn", "trace", "tagwrap_core=debug,info", "tagwrap_demo=trace"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "expected {lvl} to parse");
        }
    }

    #[test]
    fn rejects_invalid_filters() {
        for lvl in ["tagwrap_core=loud", "a=trace,b=wat"] {
            let parsed = lvl.parse::<LoggerLevel>();
            assert!(
                matches!(parsed, Err(LoggerError::InvalidLevel(_))),
                "expected InvalidLevel for {lvl}, got {parsed:?}"
            );
        }
    }

    #[test]
    fn default_is_warn() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "warn");
        let _ = lvl.to_env_filter();
    }

    #[test]
    fn serde_keeps_raw_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""tagwrap_core=trace""#).unwrap();
        assert_eq!(serde_json::to_string(&lvl).unwrap(), r#""tagwrap_core=trace""#);
    }
}
