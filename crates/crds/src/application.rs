//! Application CRD
//!
//! Declares a desired replica count and the pod template every replica is
//! created from.

use k8s_openapi::api::core::v1::PodTemplateSpec;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[kube(
    group = "apps.aloys.cn",
    version = "v1",
    kind = "Application",
    namespaced,
    shortname = "app"
)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    /// Desired number of pods
    #[serde(default)]
    #[schemars(range(min = 0))]
    pub replicas: i32,

    /// Pod template copied into every replica
    ///
    /// Kept opaque in the schema; the API server stores it as-is.
    #[serde(default)]
    #[schemars(schema_with = "preserve_unknown_fields")]
    pub template: PodTemplateSpec,
}

impl Application {
    /// Number of pods to create, negative counts read as zero
    #[must_use]
    pub fn replica_count(&self) -> u32 {
        u32::try_from(self.spec.replicas).unwrap_or(0)
    }
}

fn preserve_unknown_fields(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "object",
        "x-kubernetes-preserve-unknown-fields": true
    })
}
