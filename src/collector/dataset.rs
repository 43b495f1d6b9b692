//! Dataset graph collector

use super::Collector;
use super::convert::{
    convert_claim, convert_dataset, convert_pod, convert_runtime, convert_service,
};
use crate::error::{Error, Result};
use crate::graph::{Relationship, Resource, ResourceGraph};
use crate::kube::FluidApi;
use crate::models::fluid::dataset_selector;
use crate::models::{ResourceType, RuntimeKind};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Collects a Fluid dataset with its runtime, pods, claims and services
pub struct DatasetCollector<A> {
    api: A,
}

impl<A: FluidApi> DatasetCollector<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Try each runtime kind in order and convert the first one found
    async fn find_runtime(
        &self,
        namespace: &str,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<Resource> {
        for &kind in RuntimeKind::all() {
            match self.api.get_runtime(kind, namespace, name).await {
                Ok(Some(obj)) => return Ok(convert_runtime(&obj, kind, now)),
                Ok(None) => {}
                Err(e) => tracing::debug!("{} lookup failed: {}", kind.kind(), e),
            }
        }
        Err(Error::NoRuntime)
    }
}

#[async_trait]
impl<A: FluidApi> Collector for DatasetCollector<A> {
    fn root_type(&self) -> ResourceType {
        ResourceType::Dataset
    }

    async fn collect(&self, namespace: &str, name: &str) -> Result<ResourceGraph> {
        let now = Utc::now();

        let dataset = self.api.get_dataset(namespace, name).await?;
        let mut graph = ResourceGraph::new(convert_dataset(&dataset, now));
        let root = graph.root().key();
        tracing::debug!("Collected dataset {}/{}", namespace, name);

        let runtime = match self.find_runtime(namespace, name, now).await {
            Ok(runtime) => {
                let key = graph.add_resource(runtime);
                graph.add_edge(&root, &key, Relationship::Owns);
                Some(key)
            }
            Err(e) => {
                tracing::debug!("Skipping runtime for {}/{}: {}", namespace, name, e);
                None
            }
        };

        let selector = dataset_selector(name);

        match self.api.list_pods(namespace, &selector).await {
            Ok(pods) => {
                tracing::debug!("Found {} pods", pods.len());
                for pod in &pods {
                    let key = graph.add_resource(convert_pod(pod, now));
                    match &runtime {
                        Some(rt) => graph.add_edge(rt, &key, Relationship::Manages),
                        None => graph.add_edge(&root, &key, Relationship::Owns),
                    }
                }
            }
            Err(e) => tracing::debug!("Skipping pods: {}", e),
        }

        match self.api.list_claims(namespace, &selector).await {
            Ok(claims) => {
                tracing::debug!("Found {} persistent volume claims", claims.len());
                for claim in &claims {
                    let key = graph.add_resource(convert_claim(claim, now));
                    graph.add_edge(&root, &key, Relationship::References);
                }
            }
            Err(e) => tracing::debug!("Skipping persistent volume claims: {}", e),
        }

        match self.api.list_services(namespace, &selector).await {
            Ok(services) => {
                tracing::debug!("Found {} services", services.len());
                for svc in &services {
                    let key = graph.add_resource(convert_service(svc, now));
                    match &runtime {
                        Some(rt) => graph.add_edge(rt, &key, Relationship::Exposes),
                        None => graph.add_edge(&root, &key, Relationship::Owns),
                    }
                }
            }
            Err(e) => tracing::debug!("Skipping services: {}", e),
        }

        Ok(graph)
    }
}
