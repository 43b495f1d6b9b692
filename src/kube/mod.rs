//! Kubernetes client module
//!
//! Resolves cluster credentials and builds the one [`Client`] shared by every
//! lookup. A single client serves typed handles (`Api<Pod>`) as well as
//! dynamic handles for the Fluid custom resources.
//!
//! Credentials are resolved in this order:
//! 1. An explicit `--kubeconfig` path
//! 2. Every entry of `KUBECONFIG`, merged with missing files skipped
//! 3. In-cluster service account (when `KUBERNETES_SERVICE_HOST` is set)
//! 4. `$HOME/.kube/config`

mod fluid_api;

pub use fluid_api::{FluidApi, KubeFluidApi};
#[cfg(test)]
pub use fluid_api::MockFluidApi;

use crate::error::{Error, Result};
use kube::config::{KubeConfigOptions, Kubeconfig, KubeconfigError};
use kube::{Client, Config};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Where cluster credentials come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path passed on the command line or in the settings file
    Explicit(PathBuf),
    /// Paths listed in `KUBECONFIG`, in order
    Environment(Vec<PathBuf>),
    /// Service account mounted into the pod
    InCluster,
    /// `$HOME/.kube/config`
    DefaultFile(PathBuf),
}

/// Pick the credential source from the given inputs
///
/// Pure over its arguments so the priority order can be tested without
/// touching the process environment.
pub fn resolve_config_source(
    explicit: Option<&Path>,
    env_kubeconfig: Option<OsString>,
    in_cluster: bool,
    home: Option<PathBuf>,
) -> Result<ConfigSource> {
    if let Some(path) = explicit {
        return Ok(ConfigSource::Explicit(path.to_path_buf()));
    }

    if let Some(value) = env_kubeconfig {
        let paths: Vec<PathBuf> = std::env::split_paths(&value)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        if !paths.is_empty() {
            return Ok(ConfigSource::Environment(paths));
        }
    }

    if in_cluster {
        return Ok(ConfigSource::InCluster);
    }

    home.map(|home| ConfigSource::DefaultFile(home.join(".kube").join("config")))
        .ok_or(Error::ConfigNotFound)
}

/// Resolve the credential source from the process environment
pub fn detect_config_source(explicit: Option<&Path>) -> Result<ConfigSource> {
    let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    resolve_config_source(
        explicit,
        std::env::var_os("KUBECONFIG"),
        std::env::var_os("KUBERNETES_SERVICE_HOST").is_some(),
        home,
    )
}

/// Read and merge kubeconfig files in order
///
/// Files that do not exist are skipped, as kubectl does. The first file to
/// set a value wins. Fails when no listed file exists.
pub fn read_kubeconfigs(paths: &[PathBuf]) -> Result<Kubeconfig> {
    let mut merged: Option<Kubeconfig> = None;
    let mut first_missing = None;

    for path in paths {
        let kubeconfig_error = |source: KubeconfigError| Error::Kubeconfig {
            path: path.clone(),
            source,
        };
        match Kubeconfig::read_from(path) {
            Ok(next) => {
                merged = Some(match merged.take() {
                    Some(acc) => acc.merge(next).map_err(kubeconfig_error)?,
                    None => next,
                });
            }
            Err(source) if !path.exists() => {
                tracing::debug!(path = %path.display(), "Skipping missing kubeconfig");
                first_missing.get_or_insert(kubeconfig_error(source));
            }
            Err(source) => return Err(kubeconfig_error(source)),
        }
    }

    merged.ok_or_else(|| first_missing.unwrap_or(Error::ConfigNotFound))
}

/// Load a client configuration from the resolved source
pub async fn load_config(source: &ConfigSource) -> Result<Config> {
    let (kubeconfig, path) = match source {
        ConfigSource::InCluster => return Config::incluster().map_err(Error::InCluster),
        ConfigSource::Explicit(path) | ConfigSource::DefaultFile(path) => (
            read_kubeconfigs(std::slice::from_ref(path))?,
            path.clone(),
        ),
        ConfigSource::Environment(paths) => (
            read_kubeconfigs(paths)?,
            paths.first().cloned().unwrap_or_default(),
        ),
    };

    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|source| Error::Kubeconfig { path, source })
}

/// Initialize and return a Kubernetes client
pub async fn create_client(explicit: Option<&Path>) -> Result<Client> {
    let source = detect_config_source(explicit)?;
    tracing::debug!(?source, "Resolved kubeconfig source");

    let config = load_config(&source).await?;
    tracing::info!(cluster = %config.cluster_url, "Connecting to cluster");

    Client::try_from(config).map_err(Error::Connection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/dev"))
    }

    #[test]
    fn test_explicit_path_wins() {
        let source = resolve_config_source(
            Some(Path::new("/tmp/kc")),
            Some(OsString::from("/etc/kc")),
            true,
            home(),
        )
        .unwrap();
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("/tmp/kc")));
    }

    #[test]
    fn test_kubeconfig_env_keeps_every_entry() {
        let joined = std::env::join_paths(["/etc/first", "", "/etc/second"]).unwrap();
        let source = resolve_config_source(None, Some(joined), true, home()).unwrap();
        assert_eq!(
            source,
            ConfigSource::Environment(vec![
                PathBuf::from("/etc/first"),
                PathBuf::from("/etc/second")
            ])
        );
    }

    #[test]
    fn test_empty_kubeconfig_env_is_ignored() {
        let source = resolve_config_source(None, Some(OsString::new()), false, home()).unwrap();
        assert_eq!(
            source,
            ConfigSource::DefaultFile(PathBuf::from("/home/dev/.kube/config"))
        );
    }

    #[test]
    fn test_in_cluster_before_home() {
        let source = resolve_config_source(None, None, true, home()).unwrap();
        assert_eq!(source, ConfigSource::InCluster);
    }

    #[test]
    fn test_no_source_is_config_error() {
        let err = resolve_config_source(None, None, false, None).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound));
    }

    #[tokio::test]
    async fn test_missing_kubeconfig_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");
        let err = load_config(&ConfigSource::Explicit(path.clone()))
            .await
            .unwrap_err();
        match err {
            Error::Kubeconfig { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn write_kubeconfig(dir: &Path, file: &str, context: &str) -> PathBuf {
        let path = dir.join(file);
        let body = format!(
            r#"apiVersion: v1
kind: Config
clusters:
- name: {context}
  cluster:
    server: https://127.0.0.1:6443
users:
- name: {context}
  user:
    token: secret
contexts:
- name: {context}
  context:
    cluster: {context}
    user: {context}
current-context: {context}
"#
        );
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_missing_entries_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let real = write_kubeconfig(dir.path(), "real", "dev");
        let paths = vec![dir.path().join("missing"), real];

        let kubeconfig = read_kubeconfigs(&paths).unwrap();
        assert_eq!(kubeconfig.current_context.as_deref(), Some("dev"));
    }

    #[test]
    fn test_first_file_wins_when_merging() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![
            write_kubeconfig(dir.path(), "a", "first"),
            write_kubeconfig(dir.path(), "b", "second"),
        ];

        let kubeconfig = read_kubeconfigs(&paths).unwrap();
        assert_eq!(kubeconfig.current_context.as_deref(), Some("first"));
        assert_eq!(kubeconfig.contexts.len(), 2);
    }

    #[test]
    fn test_all_entries_missing() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("one");
        let paths = vec![first.clone(), dir.path().join("two")];

        match read_kubeconfigs(&paths).unwrap_err() {
            Error::Kubeconfig { path, .. } => assert_eq!(path, first),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_environment_source_loads_merged_config() {
        let dir = tempfile::tempdir().unwrap();
        let real = write_kubeconfig(dir.path(), "real", "dev");
        let source = ConfigSource::Environment(vec![dir.path().join("missing"), real]);

        let config = load_config(&source).await.unwrap();
        assert_eq!(config.cluster_url.host(), Some("127.0.0.1"));
    }
}
