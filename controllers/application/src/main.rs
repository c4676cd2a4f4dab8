//! Application Controller
//!
//! Creates one pod per replica for every `Application` resource, named
//! `<application>-<index>` and carrying the Application's labels and pod
//! template spec.
//!
//! Required RBAC:
//! - `applications.apps.aloys.cn`: get, list, watch
//! - `pods`: create
//!
//! Configuration comes from `WATCH_NAMESPACE`, `REQUEUE_AFTER_SECONDS` and
//! `RECONCILE_CONCURRENCY`; log filtering from `RUST_LOG` (default `info`).

mod backoff;
mod config;
mod controller;
mod error;
mod reconcile_helpers;
mod reconciler;
#[cfg(test)]
mod test_utils;

use crate::config::Config;
use crate::error::ControllerError;
use controller::Controller;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ControllerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // kube's rustls transport needs a process-wide crypto provider
    if rustls::crypto::ring::default_provider().install_default().is_err() {
        debug!("rustls crypto provider already installed");
    }

    info!("Starting Application Controller");

    let config = Config::from_env()?;

    info!("Configuration:");
    info!("  Namespace: {}", config.namespace.as_deref().unwrap_or("all namespaces"));
    info!("  Requeue after: {}s", config.requeue_after.as_secs());
    info!("  Concurrency: {}", if config.concurrency == 0 { "unbounded".to_string() } else { config.concurrency.to_string() });

    // Initialize and run controller
    let controller = Controller::new(&config).await?;
    controller.run().await?;

    Ok(())
}
