use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use tagwrap_core::ScanConfig;
use tagwrap_observe::LoggerConfig;

/// Top-level demo configuration, read from an optional JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logger: LoggerConfig,
    pub scan: ScanConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let cfg = AppConfig::from_json("{}").unwrap();
        assert_eq!(cfg.scan, ScanConfig::default());
        assert_eq!(cfg.logger.level.as_str(), "warn");
    }

    #[test]
    fn nested_sections_are_read() {
        let json = r#"{
            "logger": {"format": "json", "level": "debug"},
            "scan": {"header": "Class name: {label}", "separator": false}
        }"#;
        let cfg = AppConfig::from_json(json).unwrap();

        assert_eq!(cfg.logger.level.as_str(), "debug");
        assert_eq!(cfg.scan.header.render("m", "X"), "Class name: X");
        assert!(!cfg.scan.separator);
    }

    #[test]
    fn bad_template_is_reported() {
        let err = AppConfig::from_json(r#"{"scan": {"before": "{oops}"}}"#).unwrap_err();
        assert!(err.to_string().contains("oops"), "unexpected error: {err}");
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = AppConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
