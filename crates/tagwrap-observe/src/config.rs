use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::object::{LoggerFormat, LoggerLevel, LoggerTimeZone};

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter expression (e.g. `"warn"`, `"tagwrap_core=debug,warn"`).
    pub level: LoggerLevel,
    /// Timezone used for timestamps.
    pub tz: LoggerTimeZone,
    /// Include module targets in each line.
    pub with_targets: bool,
    /// Colorize text output when stderr is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Color is used only when requested and stderr is attached to a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LoggerConfig::default();

        assert_eq!(config.format, LoggerFormat::Text);
        assert_eq!(config.tz, LoggerTimeZone::Utc);
        assert_eq!(config.level.as_str(), "warn");
        assert!(config.with_targets);
        assert!(config.use_color);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config: LoggerConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.format, LoggerFormat::default());
        assert_eq!(config.level.as_str(), LoggerLevel::default().as_str());
        assert_eq!(config.tz, LoggerTimeZone::default());
    }

    #[test]
    fn partial_object_overrides_fields() {
        let json = r#"{"format": "json", "level": "tagwrap_core=trace", "tz": "local"}"#;
        let config: LoggerConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.format, LoggerFormat::Json);
        assert_eq!(config.level.as_str(), "tagwrap_core=trace");
        assert_eq!(config.tz, LoggerTimeZone::Local);
        assert!(config.with_targets);
    }

    #[test]
    fn invalid_level_is_rejected() {
        let json = r#"{"level": "tagwrap_core=loud"}"#;
        assert!(serde_json::from_str::<LoggerConfig>(json).is_err());
    }

    #[test]
    fn color_disabled_when_not_requested() {
        let config = LoggerConfig {
            use_color: false,
            ..Default::default()
        };
        assert!(!config.should_use_color());
    }
}
