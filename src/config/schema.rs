//! Settings file schema

use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User settings read from `config.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Namespace used when `-n` is not given
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// Output format used when `-o` is not given
    #[serde(default = "default_output")]
    pub output: String,

    /// Deadline for collecting one graph
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Kubeconfig used when `--kubeconfig` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<PathBuf>,

    /// Colorize table output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_namespace: default_namespace(),
            output: default_output(),
            timeout_seconds: default_timeout_seconds(),
            kubeconfig: None,
            color: true,
        }
    }
}

impl Settings {
    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), String> {
        if self.default_namespace.trim().is_empty() {
            return Err("defaultNamespace must not be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("timeoutSeconds must be greater than 0".to_string());
        }
        self.output
            .parse::<OutputFormat>()
            .map_err(|e| format!("output: {}", e))?;
        Ok(())
    }
}

fn default_namespace() -> String {
    "default".to_string()
}

fn default_output() -> String {
    OutputFormat::Table.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_namespace, "default");
        assert_eq!(settings.output, "table");
        assert_eq!(settings.timeout_seconds, 30);
        assert_eq!(settings.kubeconfig, None);
        assert!(settings.color);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = serde_yaml::from_str("defaultNamespace: ml\n").unwrap();
        assert_eq!(settings.default_namespace, "ml");
        assert_eq!(settings.timeout_seconds, 30);
        assert!(settings.color);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(serde_yaml::from_str::<Settings>("namespace: ml\n").is_err());
    }

    #[test]
    fn test_validate() {
        let settings = Settings {
            output: "yaml".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.validate().unwrap_err(),
            "output: must be one of: table, tree, json"
        );

        let settings = Settings {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
