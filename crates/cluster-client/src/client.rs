//! Kubernetes-backed cluster client
//!
//! Implements [`ClusterClientTrait`] on top of `kube::Api`.

use crate::cluster_trait::ClusterClientTrait;
use crate::error::ClusterError;
use crate::key::ObjectKey;
use crds::Application;
use k8s_openapi::api::core::v1::Pod;
use kube::api::PostParams;
use kube::{Api, Client};
use tracing::debug;

/// Cluster client backed by the Kubernetes API server
#[derive(Clone)]
pub struct ClusterClient {
    client: Client,
}

impl ClusterClient {
    /// Wrap an existing Kubernetes client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a client from the in-cluster config or the local kubeconfig
    pub async fn try_default() -> Result<Self, ClusterError> {
        Ok(Self::new(Client::try_default().await?))
    }
}

#[async_trait::async_trait]
impl ClusterClientTrait for ClusterClient {
    async fn validate_connectivity(&self) -> Result<(), ClusterError> {
        debug!("Validating API server connectivity");
        let version = self.client.apiserver_version().await?;
        debug!("Connected to Kubernetes {}", version.git_version);
        Ok(())
    }

    async fn get_application(&self, key: &ObjectKey) -> Result<Option<Application>, ClusterError> {
        debug!("Fetching Application {}", key);
        let api: Api<Application> = Api::namespaced(self.client.clone(), &key.namespace);
        Ok(api.get_opt(&key.name).await?)
    }

    async fn create_pod(&self, pod: &Pod) -> Result<Pod, ClusterError> {
        let namespace = pod.metadata.namespace.as_deref()
            .ok_or_else(|| ClusterError::InvalidRequest("Pod is missing a namespace".to_string()))?;
        let name = pod.metadata.name.as_deref().unwrap_or("<unknown>");

        debug!("Creating Pod {}/{}", namespace, name);
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.create(&PostParams::default(), pod).await?)
    }
}
