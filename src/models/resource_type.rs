//! Resource type definitions
//!
//! This module provides a centralized enum for every node type that can appear
//! in a resource graph. Only Dataset, Runtime, Pod, PersistentVolumeClaim and
//! Service are populated today; the remaining variants are reserved for future
//! collectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumeration of all graph node types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    // Fluid resources
    Dataset,
    Runtime,
    // Core resources
    Pod,
    PersistentVolumeClaim,
    PersistentVolume,
    Service,
    // Apps resources
    StatefulSet,
    DaemonSet,
}

impl ResourceType {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Dataset => "Dataset",
            ResourceType::Runtime => "Runtime",
            ResourceType::Pod => "Pod",
            ResourceType::PersistentVolumeClaim => "PersistentVolumeClaim",
            ResourceType::PersistentVolume => "PersistentVolume",
            ResourceType::Service => "Service",
            ResourceType::StatefulSet => "StatefulSet",
            ResourceType::DaemonSet => "DaemonSet",
        }
    }

    /// Title used for the table section listing resources of this type
    pub fn section_title(&self) -> &'static str {
        match self {
            ResourceType::Dataset => "Datasets",
            ResourceType::Runtime => "Runtime",
            ResourceType::Pod => "Pods",
            ResourceType::PersistentVolumeClaim => "PersistentVolumeClaims",
            ResourceType::PersistentVolume => "PersistentVolumes",
            ResourceType::Service => "Services",
            ResourceType::StatefulSet => "StatefulSets",
            ResourceType::DaemonSet => "DaemonSets",
        }
    }

    /// Get all resource types in declaration order
    pub fn all() -> &'static [Self] {
        &[
            ResourceType::Dataset,
            ResourceType::Runtime,
            ResourceType::Pod,
            ResourceType::PersistentVolumeClaim,
            ResourceType::PersistentVolume,
            ResourceType::Service,
            ResourceType::StatefulSet,
            ResourceType::DaemonSet,
        ]
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown resource type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(ResourceType::Dataset.as_str(), "Dataset");
        assert_eq!(
            ResourceType::PersistentVolumeClaim.as_str(),
            "PersistentVolumeClaim"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Service".parse::<ResourceType>(), Ok(ResourceType::Service));
        assert!("service".parse::<ResourceType>().is_err());
        for kind in ResourceType::all() {
            assert_eq!(kind.as_str().parse::<ResourceType>(), Ok(*kind));
        }
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(ResourceType::Runtime.section_title(), "Runtime");
        assert_eq!(ResourceType::Pod.section_title(), "Pods");
        assert_eq!(ResourceType::Service.section_title(), "Services");
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&ResourceType::PersistentVolumeClaim).unwrap();
        assert_eq!(json, "\"PersistentVolumeClaim\"");
    }
}
