//! Reconciliation logic for the Application CRD.
//!
//! Each pass reads the Application named by the triggering identity and asks
//! the API server to create one pod per replica, `<name>-0` up to
//! `<name>-<replicas - 1>`.
//!
//! A pass only ever creates. It does not check which pods already exist, does
//! not delete surplus pods and does not roll back pods created before a
//! failure. A retry after a partial failure starts again at index 0, so pods
//! created by the earlier pass come back as creation errors.

use crate::backoff::RequeuePolicy;
use crate::error::ControllerError;
use crate::reconcile_helpers::desired_pods;
use cluster_client::{ClusterClientTrait, ObjectKey};
use kube_runtime::controller::Action;
use tracing::{error, info, warn};

/// Reconciles Application resources.
///
/// Holds no per-object state; every call is a function of the identity and
/// what the store returns for it.
pub struct Reconciler {
    client: Box<dyn ClusterClientTrait>,
    backoff: Box<dyn RequeuePolicy>,
}

impl Reconciler {
    /// Creates a new reconciler instance.
    pub fn new(client: Box<dyn ClusterClientTrait>, backoff: Box<dyn RequeuePolicy>) -> Self {
        Self { client, backoff }
    }

    /// Reconciles the Application identified by `key`.
    ///
    /// This method:
    /// 1. Fetches the Application; a missing one is a finished reconcile
    /// 2. Creates its pods in index order, stopping at the first failure
    ///
    /// Returns `Action::await_change()` when there is nothing left to do. Any
    /// error should be handed to [`Reconciler::error_policy`] for the retry delay.
    pub async fn reconcile(&self, key: &ObjectKey) -> Result<Action, ControllerError> {
        info!("Reconciling Application {}", key);

        let app = match self.client.get_application(key).await {
            Ok(Some(app)) => app,
            Ok(None) => {
                info!("Application {} not found, nothing to reconcile", key);
                return Ok(Action::await_change());
            }
            Err(e) => {
                error!("Failed to get Application {}: {}", key, e);
                return Err(ControllerError::FetchApplication {
                    key: key.clone(),
                    source: e,
                });
            }
        };

        for pod in desired_pods(&app, key) {
            let pod_name = pod.metadata.name.clone().unwrap_or_default();

            if let Err(e) = self.client.create_pod(&pod).await {
                error!("Failed to create pod {} for Application {}: {}", pod_name, key, e);
                return Err(ControllerError::CreatePod {
                    key: key.clone(),
                    pod: pod_name,
                    source: e,
                });
            }

            info!("Created pod {}/{} for Application {}", key.namespace, pod_name, key);
        }

        info!("All {} pods created for Application {}", app.replica_count(), key);
        Ok(Action::await_change())
    }

    /// Action to take after `reconcile` failed for `key`.
    pub fn error_policy(&self, key: &ObjectKey, error: &ControllerError) -> Action {
        let delay = self.backoff.requeue_after(key, error);
        warn!("Requeueing Application {} in {}s after error: {}", key, delay.as_secs(), error);
        Action::requeue(delay)
    }
}
