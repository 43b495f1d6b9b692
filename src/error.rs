//! Error types for kubectl-graph
//!
//! Messages describe only the failing step; the underlying cause is exposed
//! through `source()` so callers can print the whole chain.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while resolving credentials, collecting resources, or rendering
#[derive(Debug, Error)]
pub enum Error {
    /// No kubeconfig source could be resolved
    #[error("no kubeconfig found (pass --kubeconfig, set KUBECONFIG, or run in-cluster)")]
    ConfigNotFound,

    /// The kubeconfig file exists but could not be loaded
    #[error("failed to load kubeconfig {}", path.display())]
    Kubeconfig {
        path: PathBuf,
        #[source]
        source: kube::config::KubeconfigError,
    },

    /// In-cluster credentials could not be loaded
    #[error("failed to load in-cluster configuration")]
    InCluster(#[source] kube::config::InClusterError),

    /// The settings file could not be read or parsed
    #[error("invalid settings file {}: {message}", path.display())]
    Settings { path: PathBuf, message: String },

    /// The client could not be constructed from a loaded configuration
    #[error("failed to connect to cluster")]
    Connection(#[source] kube::Error),

    /// A single named object could not be fetched
    #[error("failed to get {kind} {namespace}/{name}")]
    Lookup {
        kind: String,
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    /// A list request failed
    #[error("failed to list {kind} in namespace {namespace}")]
    List {
        kind: String,
        namespace: String,
        #[source]
        source: kube::Error,
    },

    /// A named object does not exist
    #[error("{kind} {namespace}/{name} not found")]
    NotFound {
        kind: String,
        namespace: String,
        name: String,
    },

    /// None of the known runtime kinds exist for a dataset
    #[error("no runtime found")]
    NoRuntime,

    /// The requested resource type has no registered collector
    #[error("type '{0}' not supported yet")]
    UnsupportedResourceType(String),

    /// The requested output format is unknown
    #[error("must be one of: table, tree, json")]
    InvalidOutputFormat(String),

    /// Collection did not finish before the deadline
    #[error("timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The graph could not be serialized
    #[error("failed to serialize graph")]
    Serialize(#[from] serde_json::Error),

    /// Output could not be written
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a `NotFound` error
    pub fn not_found(
        kind: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Error::NotFound {
            kind: kind.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}
