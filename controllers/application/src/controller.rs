//! Main controller implementation.
//!
//! This module contains the `Controller` struct that registers the
//! reconciler with a kube-runtime controller watching `Application`
//! resources. The runtime decides when to reconcile: on every change, and
//! again after the delay returned for a failed pass. It keeps at most one
//! reconcile in flight per Application.

use crate::backoff::FixedBackoff;
use crate::config::Config;
use crate::error::ControllerError;
use crate::reconciler::Reconciler;
use cluster_client::{ClusterClient, ClusterClientTrait, ObjectKey};
use crds::Application;
use futures::StreamExt;
use kube::{Api, Client, ResourceExt};
use kube_runtime::controller::{self, Action};
use kube_runtime::{watcher, Controller as RuntimeController};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Main controller for Application management.
pub struct Controller {
    application_api: Api<Application>,
    reconciler: Arc<Reconciler>,
    concurrency: u16,
}

impl Controller {
    /// Creates a new controller instance.
    pub async fn new(config: &Config) -> Result<Self, ControllerError> {
        info!("Initializing Application Controller");

        // Create Kubernetes client
        let kube_client = Client::try_default().await?;
        let cluster_client = ClusterClient::new(kube_client.clone());

        // Validate connectivity before proceeding
        info!("Validating API server connectivity...");
        cluster_client.validate_connectivity().await
            .map_err(|e| {
                error!("Failed to reach the Kubernetes API server: {}", e);
                error!("Check the in-cluster service account or the current kubeconfig context");
                ControllerError::Cluster(e)
            })?;
        info!("API server connectivity established");

        let application_api: Api<Application> = match config.namespace.as_deref() {
            Some(ns) => Api::namespaced(kube_client, ns),
            None => Api::all(kube_client),
        };

        let backoff = FixedBackoff::new(config.requeue_after);
        info!("Failed reconciles requeue after {}s", backoff.delay().as_secs());
        let reconciler = Reconciler::new(Box::new(cluster_client), Box::new(backoff));

        Ok(Self {
            application_api,
            reconciler: Arc::new(reconciler),
            concurrency: config.concurrency,
        })
    }

    /// Runs the controller until a shutdown signal is received.
    pub async fn run(self) -> Result<(), ControllerError> {
        info!("Application Controller running");

        RuntimeController::new(self.application_api, watcher::Config::default())
            .with_config(controller::Config::default().concurrency(self.concurrency))
            .shutdown_on_signal()
            .run(reconcile_application, error_policy, self.reconciler)
            .for_each(|result| async move {
                match result {
                    Ok((obj, action)) => debug!("Reconciled {}: {:?}", obj, action),
                    Err(e) => warn!("Reconcile failed: {}", e),
                }
            })
            .await;

        info!("Application Controller stopped");
        Ok(())
    }
}

async fn reconcile_application(
    app: Arc<Application>,
    reconciler: Arc<Reconciler>,
) -> Result<Action, ControllerError> {
    let key = ObjectKey::from_resource(app.as_ref())
        .ok_or_else(|| ControllerError::InvalidObject(format!(
            "Application {} has no namespace",
            app.name_any()
        )))?;
    reconciler.reconcile(&key).await
}

fn error_policy(app: Arc<Application>, error: &ControllerError, reconciler: Arc<Reconciler>) -> Action {
    let key = ObjectKey::new(app.namespace().unwrap_or_default(), app.name_any());
    reconciler.error_policy(&key, error)
}
