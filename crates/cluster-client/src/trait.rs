//! ClusterClient trait for mocking
//!
//! This trait abstracts the object store so reconcilers can be exercised
//! against an in-memory fake in unit tests.

use crate::error::ClusterError;
use crate::key::ObjectKey;
use crds::Application;
use k8s_openapi::api::core::v1::Pod;

/// Trait for the object store operations the controller needs
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait ClusterClientTrait: Send + Sync {
    /// Check that the API server is reachable with the current credentials
    async fn validate_connectivity(&self) -> Result<(), ClusterError>;

    /// Fetch an Application, `Ok(None)` when it does not exist
    async fn get_application(&self, key: &ObjectKey) -> Result<Option<Application>, ClusterError>;

    /// Create a Pod in the namespace set in its metadata
    async fn create_pod(&self, pod: &Pod) -> Result<Pod, ClusterError>;
}
