//! Graph collectors
//!
//! A collector turns one named root object into a [`ResourceGraph`].
//! Collectors are registered per resource-type name in [`COLLECTOR_REGISTRY`];
//! supporting a new root kind means adding a collector and one entry there.

pub mod convert;
mod dataset;

pub use dataset::DatasetCollector;

use crate::error::{Error, Result};
use crate::graph::ResourceGraph;
use crate::kube::KubeFluidApi;
use crate::models::ResourceType;
use async_trait::async_trait;
use kube::Client;

/// Builds a graph rooted at one object
#[async_trait]
pub trait Collector: Send + Sync {
    /// Type of the root node this collector produces
    fn root_type(&self) -> ResourceType;

    /// Fetch the root and its dependents
    ///
    /// Only a failure to fetch the root is an error.
    async fn collect(&self, namespace: &str, name: &str) -> Result<ResourceGraph>;
}

/// Registry entry for a collectable resource type
pub struct CollectorEntry {
    /// Name accepted on the command line
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub build: fn(Client) -> Box<dyn Collector>,
}

impl std::fmt::Debug for CollectorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectorEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl CollectorEntry {
    fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}

fn build_dataset(client: Client) -> Box<dyn Collector> {
    Box::new(DatasetCollector::new(KubeFluidApi::new(client)))
}

/// Registry of all supported root types
pub const COLLECTOR_REGISTRY: &[CollectorEntry] = &[CollectorEntry {
    name: "dataset",
    aliases: &["datasets"],
    build: build_dataset,
}];

/// Find the registry entry for a resource-type name
pub fn lookup(name: &str) -> Result<&'static CollectorEntry> {
    let normalized = name.to_ascii_lowercase();
    COLLECTOR_REGISTRY
        .iter()
        .find(|entry| entry.matches(&normalized))
        .ok_or_else(|| Error::UnsupportedResourceType(name.to_string()))
}

/// Names accepted by [`lookup`]
pub fn supported_types() -> Vec<&'static str> {
    COLLECTOR_REGISTRY.iter().map(|entry| entry.name).collect()
}
