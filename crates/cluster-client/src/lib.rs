//! Cluster Store Client
//!
//! Narrow access to the Kubernetes API server for the Application controller:
//! read an `Application` by identity and create `Pod`s.
//!
//! # Example
//!
//! ```no_run
//! use cluster_client::{ClusterClient, ClusterClientTrait, ObjectKey};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClusterClient::try_default().await?;
//! client.validate_connectivity().await?;
//!
//! let key = ObjectKey::new("ns1", "web");
//! if let Some(app) = client.get_application(&key).await? {
//!     println!("{} wants {} replicas", key, app.replica_count());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Enable the `test-util` feature for [`MockClusterClient`], an in-memory
//! store with failure injection.

pub mod client;
pub mod error;
pub mod key;
#[path = "trait.rs"]
pub mod cluster_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::ClusterClient;
pub use cluster_trait::ClusterClientTrait;
pub use error::ClusterError;
pub use key::ObjectKey;
#[cfg(feature = "test-util")]
pub use mock::MockClusterClient;
