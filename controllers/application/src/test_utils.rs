//! Test utilities for unit testing the reconciler
//!
//! This module provides helpers for creating test data and setting up test scenarios.

use crate::backoff::FixedBackoff;
use crate::reconciler::Reconciler;
use cluster_client::MockClusterClient;
use crds::{Application, ApplicationSpec};
use k8s_openapi::api::core::v1::{Container, ContainerPort, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

/// Helper to create a test Application with an nginx pod template
pub fn create_test_application(
    name: &str,
    namespace: &str,
    replicas: i32,
    labels: &[(&str, &str)],
) -> Application {
    let labels = (!labels.is_empty()).then(|| {
        labels
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<BTreeMap<_, _>>()
    });

    Application {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            labels,
            ..Default::default()
        },
        spec: ApplicationSpec {
            replicas,
            template: PodTemplateSpec {
                metadata: None,
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: "nginx".to_string(),
                        image: Some("nginx:1.27".to_string()),
                        ports: Some(vec![ContainerPort {
                            container_port: 80,
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
        },
    }
}

/// Helper to create a reconciler over a mock store with the default one minute backoff
pub fn create_test_reconciler(mock: &MockClusterClient) -> Reconciler {
    Reconciler::new(Box::new(mock.clone()), Box::new(FixedBackoff::default()))
}
