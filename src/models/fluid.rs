//! Fluid custom resource coordinates
//!
//! Group/version/kind/plural for the Dataset CRD and the runtime engines that
//! serve it, plus the label Fluid stamps on dependent objects.

use kube::core::{ApiResource, GroupVersionKind};

/// API group shared by all Fluid resources
pub const FLUID_GROUP: &str = "data.fluid.io";

/// API version shared by all Fluid resources
pub const FLUID_VERSION: &str = "v1alpha1";

/// Label linking pods, claims and services to their dataset
pub const DATASET_LABEL: &str = "fluid.io/dataset";

/// Label selector matching objects that belong to a dataset
pub fn dataset_selector(dataset: &str) -> String {
    format!("{}={}", DATASET_LABEL, dataset)
}

/// ApiResource for the Dataset CRD
pub fn dataset_api_resource() -> ApiResource {
    ApiResource::from_gvk_with_plural(
        &GroupVersionKind::gvk(FLUID_GROUP, FLUID_VERSION, "Dataset"),
        "datasets",
    )
}

/// Runtime engines that can back a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeKind {
    Alluxio,
    Jindo,
    JuiceFs,
    GooseFs,
}

impl RuntimeKind {
    /// Lookup order used when searching for a dataset's runtime
    pub fn all() -> &'static [Self] {
        &[
            RuntimeKind::Alluxio,
            RuntimeKind::Jindo,
            RuntimeKind::JuiceFs,
            RuntimeKind::GooseFs,
        ]
    }

    /// CRD kind
    pub fn kind(&self) -> &'static str {
        match self {
            RuntimeKind::Alluxio => "AlluxioRuntime",
            RuntimeKind::Jindo => "JindoRuntime",
            RuntimeKind::JuiceFs => "JuiceFSRuntime",
            RuntimeKind::GooseFs => "GooseFSRuntime",
        }
    }

    /// CRD plural used in request paths
    pub fn plural(&self) -> &'static str {
        match self {
            RuntimeKind::Alluxio => "alluxioruntimes",
            RuntimeKind::Jindo => "jindoruntimes",
            RuntimeKind::JuiceFs => "juicefsruntimes",
            RuntimeKind::GooseFs => "goosefsruntimes",
        }
    }

    pub fn api_resource(&self) -> ApiResource {
        ApiResource::from_gvk_with_plural(
            &GroupVersionKind::gvk(FLUID_GROUP, FLUID_VERSION, self.kind()),
            self.plural(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_lookup_order() {
        let plurals: Vec<_> = RuntimeKind::all().iter().map(|k| k.plural()).collect();
        assert_eq!(
            plurals,
            vec![
                "alluxioruntimes",
                "jindoruntimes",
                "juicefsruntimes",
                "goosefsruntimes"
            ]
        );
    }

    #[test]
    fn test_api_resources() {
        let dataset = dataset_api_resource();
        assert_eq!(dataset.group, "data.fluid.io");
        assert_eq!(dataset.version, "v1alpha1");
        assert_eq!(dataset.api_version, "data.fluid.io/v1alpha1");
        assert_eq!(dataset.plural, "datasets");

        let runtime = RuntimeKind::Jindo.api_resource();
        assert_eq!(runtime.kind, "JindoRuntime");
        assert_eq!(runtime.plural, "jindoruntimes");
    }

    #[test]
    fn test_dataset_selector() {
        assert_eq!(dataset_selector("mydata"), "fluid.io/dataset=mydata");
    }
}
