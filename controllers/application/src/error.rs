//! Controller-specific error types.
//!
//! This module defines error types specific to the Application Controller
//! that are not covered by upstream library errors.

use cluster_client::{ClusterError, ObjectKey};
use kube::Error as KubeError;
use thiserror::Error;

/// Errors that can occur in the Application Controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Kubernetes API error
    #[error("Kubernetes error: {0}")]
    Kube(#[from] KubeError),

    /// Cluster client error outside of a reconcile
    #[error("Cluster client error: {0}")]
    Cluster(#[from] ClusterError),

    /// Reading the Application failed for a reason other than absence
    #[error("Failed to get Application {key}: {source}")]
    FetchApplication {
        key: ObjectKey,
        source: ClusterError,
    },

    /// Creating one of the Application's pods failed
    #[error("Failed to create pod {pod} for Application {key}: {source}")]
    CreatePod {
        key: ObjectKey,
        pod: String,
        source: ClusterError,
    },

    /// Object delivered without the metadata needed to reconcile it
    #[error("Invalid object: {0}")]
    InvalidObject(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
