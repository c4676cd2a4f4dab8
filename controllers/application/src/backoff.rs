//! # Requeue Backoff
//!
//! Decides how long the controller waits before retrying a failed reconcile.
//!
//! The default policy is a fixed one minute delay with no retry cap: every
//! failure of every Application is retried after the same interval until the
//! underlying condition clears or the Application is deleted.

use crate::error::ControllerError;
use cluster_client::ObjectKey;
use std::time::Duration;

/// Policy mapping a failed reconcile to the delay before the next attempt
///
/// Implementations that need per-object state (e.g. exponential backoff) keep
/// it themselves, keyed by the object identity; the reconciler stays stateless.
pub trait RequeuePolicy: Send + Sync {
    /// Delay before the failed object is reconciled again
    fn requeue_after(&self, key: &ObjectKey, error: &ControllerError) -> Duration;
}

/// Fixed interval backoff
///
/// Every failure waits the same delay, regardless of object or error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedBackoff {
    delay: Duration,
}

impl FixedBackoff {
    /// Delay used when none is configured
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(60);

    /// Create a fixed backoff with the given delay
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured delay
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FixedBackoff {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl RequeuePolicy for FixedBackoff {
    fn requeue_after(&self, _key: &ObjectKey, _error: &ControllerError) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_minute() {
        assert_eq!(FixedBackoff::default().delay(), Duration::from_secs(60));
        assert_eq!(FixedBackoff::default(), FixedBackoff::new(FixedBackoff::DEFAULT_DELAY));
    }

    #[test]
    fn test_fixed_backoff_never_grows() {
        let backoff = FixedBackoff::default();
        let key = ObjectKey::new("ns1", "web");
        let error = ControllerError::InvalidObject("test".to_string());

        // No growth and no cap: the 1st and the 100th failure wait the same
        for _ in 0..100 {
            assert_eq!(backoff.requeue_after(&key, &error), Duration::from_secs(60));
        }
    }

    #[test]
    fn test_fixed_backoff_ignores_object() {
        let backoff = FixedBackoff::new(Duration::from_secs(15));
        let error = ControllerError::InvalidObject("test".to_string());

        assert_eq!(
            backoff.requeue_after(&ObjectKey::new("a", "one"), &error),
            backoff.requeue_after(&ObjectKey::new("b", "two"), &error),
        );
    }
}
