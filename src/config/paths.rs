//! Settings file location
//!
//! - `KUBECTL_GRAPH_CONFIG_DIR` when set
//! - Unix (Linux/macOS): `$XDG_CONFIG_HOME/kubectl-graph` or `~/.config/kubectl-graph`
//! - Windows: `%APPDATA%\kubectl-graph\config`

use std::path::{Path, PathBuf};

const APP_DIR: &str = "kubectl-graph";
const CONFIG_FILE: &str = "config.yaml";

/// Get the configuration directory path
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("KUBECTL_GRAPH_CONFIG_DIR").filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    #[cfg(windows)]
    {
        use directories::ProjectDirs;
        ProjectDirs::from("", "", APP_DIR)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_DIR))
    }
    #[cfg(not(windows))]
    {
        use directories::BaseDirs;
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        unix_config_dir(std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from), home)
    }
}

/// `$XDG_CONFIG_HOME/kubectl-graph`, else `$HOME/.config/kubectl-graph`
#[cfg_attr(windows, allow(dead_code))]
fn unix_config_dir(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    xdg_config_home
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| {
            home.map(|h| h.join(".config"))
                .unwrap_or_else(|| PathBuf::from(".").join(".config"))
        })
        .join(APP_DIR)
}

/// Get the settings file path
pub fn config_path() -> PathBuf {
    config_file_in(&config_dir())
}

pub fn config_file_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdg_config_home_wins() {
        let dir = unix_config_dir(
            Some(PathBuf::from("/xdg")),
            Some(PathBuf::from("/home/dev")),
        );
        assert_eq!(dir, PathBuf::from("/xdg/kubectl-graph"));
    }

    #[test]
    fn test_home_fallback() {
        let dir = unix_config_dir(Some(PathBuf::new()), Some(PathBuf::from("/home/dev")));
        assert_eq!(dir, PathBuf::from("/home/dev/.config/kubectl-graph"));
    }

    #[test]
    fn test_config_file_name() {
        assert_eq!(
            config_file_in(Path::new("/etc/kg")),
            PathBuf::from("/etc/kg/config.yaml")
        );
        assert!(config_path().ends_with("config.yaml"));
    }
}
