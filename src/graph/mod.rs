//! Resource graph
//!
//! The in-memory model handed from collectors to formatters: normalized
//! resources, their stable keys, and the typed edges between them.

mod resource;
mod resource_graph;

pub use resource::{
    ClaimDetails, Condition, DatasetDetails, Details, PodDetails, Resource, ResourceKey,
    RuntimeDetails, ServiceDetails,
};
pub use resource_graph::{GraphEdge, Relationship, ResourceGraph};
