//! kubectl-graph library
//!
//! Collects a Fluid dataset and the Kubernetes objects it implies into a
//! [`graph::ResourceGraph`] and renders it as a table or JSON.
//! It can be used both as a binary and as a library for testing.

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod graph;
pub mod kube;
pub mod models;
pub mod output;
pub mod rollout;

pub use error::{Error, Result};
pub use graph::{Relationship, Resource, ResourceGraph, ResourceKey};
pub use models::ResourceType;
