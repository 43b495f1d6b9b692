//! Settings subcommands

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::config::{SettingsLoader, get_setting_value, paths};

/// Settings management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show settings file path
    Path,
    /// Show effective settings, or one value
    Show {
        /// Settings key (e.g., "defaultNamespace", "timeoutSeconds")
        key: Option<String>,
    },
    /// Validate the settings file
    Validate,
}

/// Handle settings subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Path => {
            println!("{}", paths::config_path().display());
        }
        ConfigSubcommand::Show { key } => {
            let settings = SettingsLoader::load().context("failed to load settings")?;
            if let Some(key) = key {
                println!("{}", get_setting_value(&settings, &key)?);
            } else {
                let yaml =
                    serde_yaml::to_string(&settings).context("failed to serialize settings")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Validate => {
            let path = paths::config_path();
            SettingsLoader::load_from(&path).context("settings validation failed")?;
            println!("Settings are valid: {}", path.display());
        }
    }

    Ok(())
}
