//! Deployment rollout listing
//!
//! Prints a deployment's replica counts followed by every active replica set
//! it owns. The last active replica set listed is reported as current.

use crate::error::{Error, Result};
use k8s_openapi::api::apps::v1::{Deployment, ReplicaSet};
use kube::Client;
use kube::api::{Api, ListParams};
use std::io::Write;

/// Lists the rollout state of one deployment
pub struct RolloutLister {
    client: Client,
}

impl RolloutLister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, namespace: &str, name: &str, out: &mut dyn Write) -> Result<()> {
        let deployments: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        let deployment = deployments.get(name).await.map_err(|source| Error::Lookup {
            kind: "deployment".to_string(),
            namespace: namespace.to_string(),
            name: name.to_string(),
            source,
        })?;

        let replica_sets: Api<ReplicaSet> = Api::namespaced(self.client.clone(), namespace);
        let list = replica_sets
            .list(&ListParams::default())
            .await
            .map_err(|source| Error::List {
                kind: "replicasets".to_string(),
                namespace: namespace.to_string(),
                source,
            })?;
        tracing::debug!("Found {} replica sets in {}", list.items.len(), namespace);

        render_rollout(namespace, name, &deployment, &list.items, out)
    }
}

/// Whether the replica set is owned by the named deployment
fn owned_by(rs: &ReplicaSet, deployment: &str) -> bool {
    rs.metadata
        .owner_references
        .as_ref()
        .is_some_and(|owners| {
            owners
                .iter()
                .any(|o| o.kind == "Deployment" && o.name == deployment)
        })
}

/// Write the rollout report for a deployment and its namespace's replica sets
pub fn render_rollout(
    namespace: &str,
    name: &str,
    deployment: &Deployment,
    replica_sets: &[ReplicaSet],
    out: &mut dyn Write,
) -> Result<()> {
    let spec = deployment.spec.as_ref();
    let status = deployment.status.as_ref();

    writeln!(out, "Deployment: {}/{}", namespace, name)?;
    writeln!(
        out,
        "Replicas: {}/{}/{} (desired/current/ready)",
        spec.and_then(|s| s.replicas).unwrap_or(1),
        status.and_then(|s| s.replicas).unwrap_or(0),
        status.and_then(|s| s.ready_replicas).unwrap_or(0),
    )?;
    writeln!(
        out,
        "Strategy: {}",
        spec.and_then(|s| s.strategy.as_ref())
            .and_then(|s| s.type_.as_deref())
            .unwrap_or_default()
    )?;
    writeln!(out)?;

    let mut current = None;
    for rs in replica_sets.iter().filter(|rs| owned_by(rs, name)) {
        let Some(rs_status) = rs.status.as_ref().filter(|s| s.replicas > 0) else {
            continue;
        };
        let rs_name = rs.metadata.name.as_deref().unwrap_or_default();
        writeln!(out, "  ReplicaSet: {}", rs_name)?;
        writeln!(
            out,
            "   Replicas: {}/{}/{} (desired/current/ready)",
            rs.spec.as_ref().and_then(|s| s.replicas).unwrap_or(1),
            rs_status.replicas,
            rs_status.ready_replicas.unwrap_or(0),
        )?;
        writeln!(out)?;
        current = Some(rs_name);
    }

    if let Some(rs_name) = current {
        writeln!(out, "Current ReplicaSet: {}", rs_name)?;
    }
    Ok(())
}
