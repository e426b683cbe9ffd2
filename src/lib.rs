//! Chaos engineering activities for Oracle Cloud Infrastructure.
//!
//! This crate exposes actions that disrupt OCI resources (stopping compute
//! instances, deleting gateways, draining load balancers) and probes that
//! inspect them, for use as turbulence-inducing activities in resilience
//! experiments.
//!
//! Every multi-resource activity runs the same pipeline: list a resource
//! kind page by page, narrow the listing with exact-match attribute
//! filters, then hand the survivors to the activity (pick one at random,
//! act on all of them, or just count them).

pub mod compute;
pub mod config;
pub mod discovery;
pub mod error;
pub mod load_balancer;
pub mod networking;
pub mod object_storage;
pub mod oci;
pub mod pipeline;

pub use config::OciConfig;
pub use error::{ActivityError, Result};
pub use oci::OciClient;
pub use pipeline::{FilterSet, Filterable};

/// Crate version, reported in the user agent of every API request.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
