//! Error taxonomy for actions and probes.
//!
//! Every failure an activity can surface maps to one variant here. None of
//! them are retried internally; the host experiment runner owns retry and
//! rollback policy.

use thiserror::Error;

/// Failure of a single action or probe invocation.
#[derive(Debug, Error)]
pub enum ActivityError {
    /// A required scope key (compartment, VCN, parent resource id) could not
    /// be resolved from the arguments or the loaded profile.
    #[error("a {0} is required, without one we cannot continue")]
    MissingScope(&'static str),

    /// The filter set named attributes that are not legal filter attributes
    /// for this resource kind. No partial filtering is performed.
    #[error("some requested filters are not valid {kind} attributes: {}", names.join(", "))]
    InvalidFilter {
        kind: &'static str,
        names: Vec<String>,
    },

    /// The fetch produced nothing to filter. Distinct from `NoMatch` so an
    /// operator can tell a wrong scope from a filter that found nothing.
    #[error("no {0} were found")]
    NoResources(&'static str),

    /// Filtering succeeded but left no candidates for a consumer that needs
    /// at least one target.
    #[error("no {0} matched the given filters")]
    NoMatch(&'static str),

    /// The profile file was missing, unreadable, or failed validation.
    #[error("OCI configuration error: {0}")]
    Config(String),

    /// The control plane rejected the request. Propagated untranslated.
    #[error("OCI API request failed: {status} {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure from the underlying HTTP client.
    #[error("request transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body that did not decode into the expected model.
    #[error("failed to decode OCI response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ActivityError>;
