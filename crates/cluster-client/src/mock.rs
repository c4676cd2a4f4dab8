//! Mock ClusterClient for unit testing
//!
//! Stores Applications and Pods in memory, records every create attempt in
//! order, and can be told to fail or stall specific calls. Failures are the
//! same `kube::Error::Api` responses the API server returns.

use crate::cluster_trait::ClusterClientTrait;
use crate::error::ClusterError;
use crate::key::ObjectKey;
use crds::Application;
use k8s_openapi::api::core::v1::Pod;
use kube::core::ErrorResponse;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mock ClusterClient for testing
///
/// Clones share the same in-memory state, so a test can keep a handle while
/// the reconciler owns another.
#[derive(Clone, Default)]
pub struct MockClusterClient {
    applications: Arc<Mutex<HashMap<ObjectKey, Application>>>,
    pods: Arc<Mutex<BTreeMap<ObjectKey, Pod>>>,
    create_requests: Arc<Mutex<Vec<Pod>>>,
    get_requests: Arc<Mutex<Vec<ObjectKey>>>,
    get_failure: Arc<Mutex<Option<String>>>,
    create_failures: Arc<Mutex<HashMap<String, String>>>,
    stalled_creates: Arc<Mutex<HashSet<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn api_error(code: u16, reason: &str, message: String) -> ClusterError {
    ClusterError::Kube(kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message,
        reason: reason.to_string(),
        code,
    }))
}

impl MockClusterClient {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an Application to the mock store (for test setup)
    ///
    /// Objects without a name or namespace are ignored.
    pub fn add_application(&self, app: Application) {
        if let Some(key) = ObjectKey::from_resource(&app) {
            lock(&self.applications).insert(key, app);
        }
    }

    /// Remove an Application, as if it was deleted before the reconcile ran
    pub fn remove_application(&self, key: &ObjectKey) {
        lock(&self.applications).remove(key);
    }

    /// Make every `get_application` call fail with a 503 ServiceUnavailable
    pub fn fail_gets(&self, message: impl Into<String>) {
        *lock(&self.get_failure) = Some(message.into());
    }

    /// Make creation of the named Pod fail with a 500 InternalError
    pub fn fail_create_for(&self, pod_name: impl Into<String>, message: impl Into<String>) {
        lock(&self.create_failures).insert(pod_name.into(), message.into());
    }

    /// Make creation of the named Pod hang until the caller gives up
    pub fn stall_create_for(&self, pod_name: impl Into<String>) {
        lock(&self.stalled_creates).insert(pod_name.into());
    }

    /// Remove all injected failures and stalls
    pub fn clear_failures(&self) {
        *lock(&self.get_failure) = None;
        lock(&self.create_failures).clear();
        lock(&self.stalled_creates).clear();
    }

    /// Every Pod passed to `create_pod`, in call order, including failed attempts
    pub fn create_requests(&self) -> Vec<Pod> {
        lock(&self.create_requests).clone()
    }

    /// Names of every Pod passed to `create_pod`, in call order
    pub fn create_request_names(&self) -> Vec<String> {
        lock(&self.create_requests)
            .iter()
            .map(|pod| pod.metadata.name.clone().unwrap_or_default())
            .collect()
    }

    /// Every key passed to `get_application`, in call order
    pub fn get_requests(&self) -> Vec<ObjectKey> {
        lock(&self.get_requests).clone()
    }

    /// Pods currently stored, ordered by namespace then name
    pub fn pods(&self) -> Vec<Pod> {
        lock(&self.pods).values().cloned().collect()
    }

    /// Look up a stored Pod
    pub fn pod(&self, key: &ObjectKey) -> Option<Pod> {
        lock(&self.pods).get(key).cloned()
    }
}

#[async_trait::async_trait]
impl ClusterClientTrait for MockClusterClient {
    async fn validate_connectivity(&self) -> Result<(), ClusterError> {
        Ok(())
    }

    async fn get_application(&self, key: &ObjectKey) -> Result<Option<Application>, ClusterError> {
        lock(&self.get_requests).push(key.clone());

        if let Some(message) = lock(&self.get_failure).clone() {
            return Err(api_error(503, "ServiceUnavailable", message));
        }

        Ok(lock(&self.applications).get(key).cloned())
    }

    async fn create_pod(&self, pod: &Pod) -> Result<Pod, ClusterError> {
        lock(&self.create_requests).push(pod.clone());

        let key = ObjectKey::from_resource(pod)
            .ok_or_else(|| ClusterError::InvalidRequest("Pod is missing a name or namespace".to_string()))?;

        let stalled = lock(&self.stalled_creates).contains(&key.name);
        if stalled {
            std::future::pending::<()>().await;
        }

        if let Some(message) = lock(&self.create_failures).get(&key.name).cloned() {
            return Err(api_error(500, "InternalError", message));
        }

        let mut pods = lock(&self.pods);
        if pods.contains_key(&key) {
            return Err(api_error(409, "AlreadyExists", format!("pods \"{}\" already exists", key.name)));
        }
        pods.insert(key, pod.clone());
        Ok(pod.clone())
    }
}
