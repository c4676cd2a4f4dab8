//! Application CRD Definitions
//!
//! Kubernetes Custom Resource Definitions for the Application controller.

pub mod application;

pub use application::*;
