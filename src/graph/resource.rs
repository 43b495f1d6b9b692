//! Normalized resource records
//!
//! Every API object collected for a graph is converted into a [`Resource`],
//! whatever its original shape. Kind-specific fields live in [`Details`].

use crate::models::ResourceType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// A single node in the resource graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Node type
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Object name
    pub name: String,
    /// Object namespace
    pub namespace: String,
    /// Free-text phase (e.g. "Running", "Bound")
    pub status: String,
    /// Time elapsed since creation, captured when the object was converted
    #[serde(with = "age_seconds")]
    pub age: Duration,
    /// Kind-specific fields
    pub details: Details,
    /// Object labels
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// Conditions in the order reported by the API server
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Resource {
    /// Create a resource with no labels, conditions or details
    pub fn new(
        resource_type: ResourceType,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            resource_type,
            name: name.into(),
            namespace: namespace.into(),
            status: String::new(),
            age: Duration::ZERO,
            details: Details::None,
            labels: BTreeMap::new(),
            conditions: Vec::new(),
        }
    }

    /// Stable identity of this resource
    pub fn key(&self) -> ResourceKey {
        ResourceKey {
            resource_type: self.resource_type,
            namespace: self.namespace.clone(),
            name: self.name.clone(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_age(mut self, age: Duration) -> Self {
        self.age = age;
        self
    }

    pub fn with_details(mut self, details: Details) -> Self {
        self.details = details;
        self
    }
}

/// Identity of a node: `(type, namespace, name)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceKey {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub namespace: String,
    pub name: String,
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.resource_type, self.namespace, self.name)
    }
}

/// A status condition copied from the API object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub message: String,
}

/// Kind-specific detail set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Details {
    Dataset(DatasetDetails),
    Runtime(RuntimeDetails),
    Pod(PodDetails),
    PersistentVolumeClaim(ClaimDetails),
    Service(ServiceDetails),
    None,
}

impl Details {
    /// Key/value view used when dumping a resource's details
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        match self {
            Details::Dataset(d) => vec![
                ("ufsTotal", d.ufs_total.clone()),
                ("cached", d.cached.clone()),
            ],
            Details::Runtime(d) => vec![
                ("type", d.runtime_type.clone()),
                ("replicas", d.replicas.to_string()),
            ],
            Details::Pod(d) => vec![
                ("node", d.node.clone()),
                ("restarts", d.restarts.to_string()),
                ("hostIP", d.host_ip.clone()),
                ("podIP", d.pod_ip.clone()),
            ],
            Details::PersistentVolumeClaim(d) => vec![
                ("volumeName", d.volume_name.clone()),
                ("capacity", d.capacity.clone()),
                ("requested", d.requested.clone()),
            ],
            Details::Service(d) => vec![
                ("type", d.service_type.clone()),
                ("clusterIP", d.cluster_ip.clone()),
                ("ports", d.ports.clone()),
            ],
            Details::None => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetDetails {
    pub ufs_total: String,
    pub cached: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeDetails {
    /// Runtime CRD kind, e.g. "AlluxioRuntime"
    #[serde(rename = "type")]
    pub runtime_type: String,
    pub replicas: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodDetails {
    pub node: String,
    /// Sum of restart counts across all containers
    pub restarts: i32,
    #[serde(rename = "hostIP")]
    pub host_ip: String,
    #[serde(rename = "podIP")]
    pub pod_ip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDetails {
    pub volume_name: String,
    pub capacity: String,
    pub requested: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDetails {
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(rename = "clusterIP")]
    pub cluster_ip: String,
    /// Comma-joined `port/protocol` list in API order
    pub ports: String,
}

/// Ages are written as whole seconds
mod age_seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(age: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(age.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
