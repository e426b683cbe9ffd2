//! OCI REST API plumbing: HTTP transport and the capability-scoped client.

pub mod client;
pub mod http;

pub use client::OciClient;
