mod error;
pub use error::ConfigError;

mod template;
pub use template::{NoticeTemplate, PLACEHOLDER_LABEL, PLACEHOLDER_METHOD};

use serde::{Deserialize, Serialize};

pub const DEFAULT_HEADER: &str = "Generated class: {label}";
pub const DEFAULT_BEFORE: &str = "Before method call: running boilerplate code";
pub const DEFAULT_AFTER: &str = "After method call: running boilerplate code";

/// Text emitted around every tagged method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Line identifying the declared label.
    pub header: NoticeTemplate,
    /// Line written right before the method runs.
    pub before: NoticeTemplate,
    /// Line written right after the method returns successfully.
    pub after: NoticeTemplate,
    /// Whether to write a blank line between method blocks.
    pub separator: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            header: builtin(DEFAULT_HEADER),
            before: builtin(DEFAULT_BEFORE),
            after: builtin(DEFAULT_AFTER),
            separator: true,
        }
    }
}

fn builtin(raw: &str) -> NoticeTemplate {
    NoticeTemplate::new(raw).expect("built-in notice template must be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ScanConfig::default();

        assert_eq!(config.header.as_str(), DEFAULT_HEADER);
        assert_eq!(config.before.as_str(), DEFAULT_BEFORE);
        assert_eq!(config.after.as_str(), DEFAULT_AFTER);
        assert!(config.separator);
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let config: ScanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn partial_deserialization() {
        let json = r#"{"header": "Class name: {label}", "separator": false}"#;
        let config: ScanConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.header.render("m", "X"), "Class name: X");
        assert_eq!(config.before.as_str(), DEFAULT_BEFORE);
        assert!(!config.separator);
    }

    #[test]
    fn invalid_template_fails_whole_config() {
        let json = r#"{"after": "done with {methd}"}"#;
        let res = serde_json::from_str::<ScanConfig>(json);
        assert!(res.is_err(), "typo in placeholder should be rejected");
    }
}
