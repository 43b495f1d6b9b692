//! Settings loading
//!
//! Precedence order (highest to lowest):
//! 1. Command-line flags (applied by the caller)
//! 2. Environment overrides (`NO_COLOR`)
//! 3. The settings file
//! 4. Built-in defaults

use super::{paths, schema::Settings};
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::Path;

/// Settings loader
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load the settings file from its default location with env overrides
    pub fn load() -> Result<Settings> {
        let settings = Self::load_from(&paths::config_path())?;
        Ok(Self::apply_env_overrides(
            settings,
            std::env::var_os("NO_COLOR"),
        ))
    }

    /// Load a settings file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Settings> {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let settings_error = |message: String| Error::Settings {
            path: path.to_path_buf(),
            message,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| settings_error(e.to_string()))?;

        // An empty file deserializes as unit, not as a map
        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings: Settings =
            serde_yaml::from_str(&contents).map_err(|e| settings_error(e.to_string()))?;
        settings.validate().map_err(settings_error)?;

        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(mut settings: Settings, no_color: Option<OsString>) -> Settings {
        if no_color.is_some_and(|v| !v.is_empty()) {
            settings.color = false;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SettingsLoader::load_from(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "defaultNamespace: ml\noutput: json\ntimeoutSeconds: 5\nkubeconfig: /etc/kc\ncolor: false\n",
        )
        .unwrap();

        let settings = SettingsLoader::load_from(&path).unwrap();
        assert_eq!(settings.default_namespace, "ml");
        assert_eq!(settings.output, "json");
        assert_eq!(settings.timeout_seconds, 5);
        assert_eq!(settings.kubeconfig, Some(PathBuf::from("/etc/kc")));
        assert!(!settings.color);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(SettingsLoader::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_unparsable_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "timeoutSeconds: soon\n").unwrap();

        let err = SettingsLoader::load_from(&path).unwrap_err();
        match err {
            Error::Settings { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_value_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "output: yaml\n").unwrap();

        let err = SettingsLoader::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("must be one of: table, tree, json"));
    }

    #[test]
    fn test_no_color_override() {
        let settings = SettingsLoader::apply_env_overrides(
            Settings::default(),
            Some(OsString::from("1")),
        );
        assert!(!settings.color);

        let settings =
            SettingsLoader::apply_env_overrides(Settings::default(), Some(OsString::new()));
        assert!(settings.color);

        let settings = SettingsLoader::apply_env_overrides(Settings::default(), None);
        assert!(settings.color);
    }
}
