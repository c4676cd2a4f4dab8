//! Cluster client errors

use thiserror::Error;

/// Errors that can occur when talking to the Kubernetes API server
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Kubernetes client or API error
    #[error("Kubernetes error: {0}")]
    Kube(#[from] kube::Error),

    /// Invalid request (e.g., missing required fields)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::core::ErrorResponse;

    fn already_exists() -> kube::Error {
        kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: "pods \"web-0\" already exists".to_string(),
            reason: "AlreadyExists".to_string(),
            code: 409,
        })
    }

    #[test]
    fn test_conflict_is_passed_through_unchanged() {
        let err = ClusterError::from(already_exists());

        assert!(matches!(
            err,
            ClusterError::Kube(kube::Error::Api(ref resp)) if resp.code == 409 && resp.reason == "AlreadyExists"
        ));
        assert!(err.to_string().starts_with("Kubernetes error: "));
    }
}
