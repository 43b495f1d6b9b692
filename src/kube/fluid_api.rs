//! Cluster reads needed to assemble a dataset graph

use crate::error::{Error, Result};
use crate::models::RuntimeKind;
use crate::models::fluid::dataset_api_resource;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, Pod, Service};
use kube::Client;
use kube::api::{Api, DynamicObject, ListParams};

/// Read-only access to a dataset and the objects labelled with it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FluidApi: Send + Sync {
    /// Fetch the Dataset custom resource
    async fn get_dataset(&self, namespace: &str, name: &str) -> Result<DynamicObject>;

    /// Fetch one runtime kind by name; `None` when it does not exist
    async fn get_runtime(
        &self,
        kind: RuntimeKind,
        namespace: &str,
        name: &str,
    ) -> Result<Option<DynamicObject>>;

    async fn list_pods(&self, namespace: &str, selector: &str) -> Result<Vec<Pod>>;

    async fn list_claims(
        &self,
        namespace: &str,
        selector: &str,
    ) -> Result<Vec<PersistentVolumeClaim>>;

    async fn list_services(&self, namespace: &str, selector: &str) -> Result<Vec<Service>>;
}

/// [`FluidApi`] backed by a live cluster
#[derive(Clone)]
pub struct KubeFluidApi {
    client: Client,
}

impl KubeFluidApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FluidApi for KubeFluidApi {
    async fn get_dataset(&self, namespace: &str, name: &str) -> Result<DynamicObject> {
        let ar = dataset_api_resource();
        let api: Api<DynamicObject> = Api::namespaced_with(self.client.clone(), namespace, &ar);
        api.get_opt(name)
            .await
            .map_err(|source| Error::Lookup {
                kind: ar.kind.clone(),
                namespace: namespace.to_string(),
                name: name.to_string(),
                source,
            })?
            .ok_or_else(|| Error::not_found(&ar.kind, namespace, name))
    }

    async fn get_runtime(
        &self,
        kind: RuntimeKind,
        namespace: &str,
        name: &str,
    ) -> Result<Option<DynamicObject>> {
        let ar = kind.api_resource();
        let api: Api<DynamicObject> = Api::namespaced_with(self.client.clone(), namespace, &ar);
        api.get_opt(name).await.map_err(|source| Error::Lookup {
            kind: kind.kind().to_string(),
            namespace: namespace.to_string(),
            name: name.to_string(),
            source,
        })
    }

    async fn list_pods(&self, namespace: &str, selector: &str) -> Result<Vec<Pod>> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let list = api
            .list(&ListParams::default().labels(selector))
            .await
            .map_err(|source| Error::List {
                kind: "pods".to_string(),
                namespace: namespace.to_string(),
                source,
            })?;
        Ok(list.items)
    }

    async fn list_claims(
        &self,
        namespace: &str,
        selector: &str,
    ) -> Result<Vec<PersistentVolumeClaim>> {
        let api: Api<PersistentVolumeClaim> = Api::namespaced(self.client.clone(), namespace);
        let list = api
            .list(&ListParams::default().labels(selector))
            .await
            .map_err(|source| Error::List {
                kind: "persistentvolumeclaims".to_string(),
                namespace: namespace.to_string(),
                source,
            })?;
        Ok(list.items)
    }

    async fn list_services(&self, namespace: &str, selector: &str) -> Result<Vec<Service>> {
        let api: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        let list = api
            .list(&ListParams::default().labels(selector))
            .await
            .map_err(|source| Error::List {
                kind: "services".to_string(),
                namespace: namespace.to_string(),
                source,
            })?;
        Ok(list.items)
    }
}
