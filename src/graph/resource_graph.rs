//! Graph data structures for resource relationships
//!
//! A [`ResourceGraph`] has exactly one root (the queried object), per-type
//! buckets of dependent resources, and an ordered list of typed edges.
//! Nodes are identified by [`ResourceKey`], so edges survive serialization.

use crate::graph::resource::{Resource, ResourceKey};
use crate::models::ResourceType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Type of relationship between nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// Dataset owns its runtime (or pods/services when no runtime exists)
    Owns,
    /// Runtime manages its pods
    Manages,
    /// Dataset references a volume claim
    References,
    /// Runtime exposes a service
    Exposes,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Owns => "owns",
            Relationship::Manages => "manages",
            Relationship::References => "references",
            Relationship::Exposes => "exposes",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An edge representing a relationship between nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source node
    pub from: ResourceKey,
    /// Target node
    pub to: ResourceKey,
    /// Relationship type
    #[serde(rename = "type")]
    pub relationship: Relationship,
}

/// A graph rooted at one queried resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "GraphDocument")]
pub struct ResourceGraph {
    root: Resource,
    resources: BTreeMap<ResourceType, Vec<Resource>>,
    edges: Vec<GraphEdge>,
    /// Map from node key to its bucket position
    #[serde(skip)]
    node_index: HashMap<ResourceKey, (ResourceType, usize)>,
}

/// Serialized shape of a graph; the node index is rebuilt on load
#[derive(Deserialize)]
struct GraphDocument {
    root: Resource,
    #[serde(default)]
    resources: BTreeMap<ResourceType, Vec<Resource>>,
    #[serde(default)]
    edges: Vec<GraphEdge>,
}

impl From<GraphDocument> for ResourceGraph {
    fn from(doc: GraphDocument) -> Self {
        let mut graph = ResourceGraph::new(doc.root);
        for resource in doc.resources.into_values().flatten() {
            graph.add_resource(resource);
        }
        graph.edges = doc.edges;
        graph
    }
}

impl ResourceGraph {
    /// Create a graph around its root resource
    pub fn new(root: Resource) -> Self {
        Self {
            root,
            resources: BTreeMap::new(),
            edges: Vec::new(),
            node_index: HashMap::new(),
        }
    }

    /// The queried resource
    pub fn root(&self) -> &Resource {
        &self.root
    }

    /// Resources of one type in insertion order
    pub fn resources(&self, resource_type: ResourceType) -> &[Resource] {
        self.resources
            .get(&resource_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Number of non-root resources
    pub fn resource_count(&self) -> usize {
        self.resources.values().map(Vec::len).sum()
    }

    /// Add a resource to its type bucket and return its key
    ///
    /// A second resource with the same key is still appended to the bucket,
    /// but lookups by key resolve to the first one.
    pub fn add_resource(&mut self, resource: Resource) -> ResourceKey {
        let key = resource.key();
        let bucket = self.resources.entry(resource.resource_type).or_default();
        let index = bucket.len();
        bucket.push(resource);
        self.node_index
            .entry(key.clone())
            .or_insert((key.resource_type, index));
        key
    }

    /// Add an edge between two known nodes
    pub fn add_edge(&mut self, from: &ResourceKey, to: &ResourceKey, relationship: Relationship) {
        if !self.contains(from) || !self.contains(to) {
            tracing::warn!(
                "Adding {} edge with unknown endpoint: {} -> {}",
                relationship,
                from,
                to
            );
        }
        self.edges.push(GraphEdge {
            from: from.clone(),
            to: to.clone(),
            relationship,
        });
    }

    /// Whether the key names the root or an added resource
    pub fn contains(&self, key: &ResourceKey) -> bool {
        self.root.key() == *key || self.node_index.contains_key(key)
    }

    /// Look up a non-root resource by key
    pub fn get(&self, key: &ResourceKey) -> Option<&Resource> {
        let (resource_type, index) = self.node_index.get(key)?;
        self.resources.get(resource_type)?.get(*index)
    }

    /// Resources reachable by one outgoing edge from `parent`, in edge order
    ///
    /// The root is never returned.
    pub fn get_children(&self, parent: &ResourceKey) -> Vec<&Resource> {
        self.edges
            .iter()
            .filter(|edge| edge.from == *parent)
            .filter_map(|edge| self.get(&edge.to))
            .collect()
    }
}
