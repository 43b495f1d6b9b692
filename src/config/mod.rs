//! User settings
//!
//! An optional YAML file supplying defaults for flags that are not given on
//! the command line.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::SettingsLoader;
pub use schema::Settings;

use crate::error::{Error, Result};

/// Get a settings value by its file key
pub fn get_setting_value(settings: &Settings, key: &str) -> Result<String> {
    match key {
        "defaultNamespace" => Ok(settings.default_namespace.clone()),
        "output" => Ok(settings.output.clone()),
        "timeoutSeconds" => Ok(settings.timeout_seconds.to_string()),
        "kubeconfig" => Ok(settings
            .kubeconfig
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "color" => Ok(settings.color.to_string()),
        _ => Err(Error::Settings {
            path: paths::config_path(),
            message: format!("unknown key '{}'", key),
        }),
    }
}
