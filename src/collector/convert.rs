//! Conversion of raw API objects into graph resources
//!
//! Each function is pure: it takes the object and the conversion instant and
//! never fails. Missing fields become empty strings or zero.

use crate::graph::{
    ClaimDetails, Condition, DatasetDetails, Details, PodDetails, Resource, RuntimeDetails,
    ServiceDetails,
};
use crate::models::{ResourceType, RuntimeKind};
use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, Pod, Service};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::DynamicObject;
use serde_json::Value;
use std::time::{Duration, SystemTime};

/// Time since `creationTimestamp`, zero when missing or in the future
pub fn creation_age(meta: &ObjectMeta, now: DateTime<Utc>) -> Duration {
    match &meta.creation_timestamp {
        Some(ts) => {
            let created = DateTime::<Utc>::from(SystemTime::from(ts.0));
            now.signed_duration_since(created)
                .to_std()
                .unwrap_or(Duration::ZERO)
        }
        None => Duration::ZERO,
    }
}

fn base(resource_type: ResourceType, meta: &ObjectMeta, now: DateTime<Utc>) -> Resource {
    let mut resource = Resource::new(
        resource_type,
        meta.name.clone().unwrap_or_default(),
        meta.namespace.clone().unwrap_or_default(),
    )
    .with_age(creation_age(meta, now));
    resource.labels = meta.labels.clone().unwrap_or_default();
    resource
}

fn string_at(value: &Value, pointer: &str) -> String {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Conditions from an untyped `status.conditions` array
fn conditions_at(value: &Value, pointer: &str) -> Vec<Condition> {
    value
        .pointer(pointer)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|c| Condition {
                    condition_type: string_at(c, "/type"),
                    status: string_at(c, "/status"),
                    reason: string_at(c, "/reason"),
                    message: string_at(c, "/message"),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn convert_dataset(obj: &DynamicObject, now: DateTime<Utc>) -> Resource {
    let mut resource = base(ResourceType::Dataset, &obj.metadata, now)
        .with_status(string_at(&obj.data, "/status/phase"))
        .with_details(Details::Dataset(DatasetDetails {
            ufs_total: string_at(&obj.data, "/status/ufsTotal"),
            cached: string_at(&obj.data, "/status/cacheStates/cached"),
        }));
    resource.conditions = conditions_at(&obj.data, "/status/conditions");
    resource
}

pub fn convert_runtime(obj: &DynamicObject, kind: RuntimeKind, now: DateTime<Utc>) -> Resource {
    let replicas = obj
        .data
        .pointer("/spec/replicas")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    let mut resource = base(ResourceType::Runtime, &obj.metadata, now)
        .with_status(string_at(&obj.data, "/status/phase"))
        .with_details(Details::Runtime(RuntimeDetails {
            runtime_type: kind.kind().to_string(),
            replicas,
        }));
    resource.conditions = conditions_at(&obj.data, "/status/conditions");
    resource
}

pub fn convert_pod(pod: &Pod, now: DateTime<Utc>) -> Resource {
    let spec = pod.spec.as_ref();
    let status = pod.status.as_ref();

    let restarts = status
        .and_then(|s| s.container_statuses.as_ref())
        .map(|cs| cs.iter().map(|c| c.restart_count).sum::<i32>())
        .unwrap_or(0);

    let mut resource = base(ResourceType::Pod, &pod.metadata, now)
        .with_status(status.and_then(|s| s.phase.clone()).unwrap_or_default())
        .with_details(Details::Pod(PodDetails {
            node: spec.and_then(|s| s.node_name.clone()).unwrap_or_default(),
            restarts,
            host_ip: status.and_then(|s| s.host_ip.clone()).unwrap_or_default(),
            pod_ip: status.and_then(|s| s.pod_ip.clone()).unwrap_or_default(),
        }));

    resource.conditions = status
        .and_then(|s| s.conditions.as_ref())
        .map(|conds| {
            conds
                .iter()
                .map(|c| Condition {
                    condition_type: c.type_.clone(),
                    status: c.status.clone(),
                    reason: c.reason.clone().unwrap_or_default(),
                    message: c.message.clone().unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default();
    resource
}

pub fn convert_claim(pvc: &PersistentVolumeClaim, now: DateTime<Utc>) -> Resource {
    let spec = pvc.spec.as_ref();
    let status = pvc.status.as_ref();

    let capacity = status
        .and_then(|s| s.capacity.as_ref())
        .and_then(|c| c.get("storage"))
        .map(|q| q.0.clone())
        .unwrap_or_default();
    let requested = spec
        .and_then(|s| s.resources.as_ref())
        .and_then(|r| r.requests.as_ref())
        .and_then(|r| r.get("storage"))
        .map(|q| q.0.clone())
        .unwrap_or_default();

    let mut resource = base(ResourceType::PersistentVolumeClaim, &pvc.metadata, now)
        .with_status(status.and_then(|s| s.phase.clone()).unwrap_or_default())
        .with_details(Details::PersistentVolumeClaim(ClaimDetails {
            volume_name: spec.and_then(|s| s.volume_name.clone()).unwrap_or_default(),
            capacity,
            requested,
        }));

    resource.conditions = status
        .and_then(|s| s.conditions.as_ref())
        .map(|conds| {
            conds
                .iter()
                .map(|c| Condition {
                    condition_type: c.type_.clone(),
                    status: c.status.clone(),
                    reason: c.reason.clone().unwrap_or_default(),
                    message: c.message.clone().unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default();
    resource
}

/// Services have no phase, so they are always reported as `Active`
pub fn convert_service(svc: &Service, now: DateTime<Utc>) -> Resource {
    let spec = svc.spec.as_ref();

    let ports = spec
        .and_then(|s| s.ports.as_ref())
        .map(|ports| {
            ports
                .iter()
                .map(|p| format!("{}/{}", p.port, p.protocol.as_deref().unwrap_or("TCP")))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    base(ResourceType::Service, &svc.metadata, now)
        .with_status("Active")
        .with_details(Details::Service(ServiceDetails {
            service_type: spec.and_then(|s| s.type_.clone()).unwrap_or_default(),
            cluster_ip: spec.and_then(|s| s.cluster_ip.clone()).unwrap_or_default(),
            ports,
        }))
}
