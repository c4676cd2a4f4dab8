//! Controller configuration loaded from environment variables.

use crate::backoff::FixedBackoff;
use crate::error::ControllerError;
use std::env;
use std::time::Duration;

/// Namespace to watch; unset or empty watches all namespaces
pub const WATCH_NAMESPACE: &str = "WATCH_NAMESPACE";
/// Seconds to wait before retrying a failed reconcile
pub const REQUEUE_AFTER_SECONDS: &str = "REQUEUE_AFTER_SECONDS";
/// Maximum number of Applications reconciled at once, 0 for no limit
pub const RECONCILE_CONCURRENCY: &str = "RECONCILE_CONCURRENCY";

/// Runtime configuration for the Application Controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Namespace to watch, `None` for all namespaces
    pub namespace: Option<String>,
    /// Delay before a failed reconcile is retried
    pub requeue_after: Duration,
    /// Concurrent reconciles across distinct Applications, 0 for unbounded
    pub concurrency: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: None,
            requeue_after: FixedBackoff::DEFAULT_DELAY,
            concurrency: 0,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ControllerError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ControllerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let namespace = lookup(WATCH_NAMESPACE)
            .map(|ns| ns.trim().to_string())
            .filter(|ns| !ns.is_empty());

        let requeue_after = match lookup(REQUEUE_AFTER_SECONDS) {
            Some(raw) => {
                let seconds = raw.trim().parse::<u64>()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or_else(|| ControllerError::InvalidConfig(format!(
                        "{REQUEUE_AFTER_SECONDS} must be a positive number of seconds, got {raw:?}"
                    )))?;
                Duration::from_secs(seconds)
            }
            None => defaults.requeue_after,
        };

        let concurrency = match lookup(RECONCILE_CONCURRENCY) {
            Some(raw) => raw.trim().parse::<u16>()
                .map_err(|e| ControllerError::InvalidConfig(format!(
                    "{RECONCILE_CONCURRENCY} must be an integer between 0 and {}, got {raw:?}: {e}",
                    u16::MAX
                )))?,
            None => defaults.concurrency,
        };

        Ok(Self {
            namespace,
            requeue_after,
            concurrency,
        })
    }
}
