//! Resource query pipeline.
//!
//! Every resource kind goes through the same three stages: a paginated
//! fetch of the full collection, an attribute-based predicate filter, and a
//! consumer that counts, picks one target at random, or resolves a bulk
//! target list. The kinds differ only in their `Filterable` adapter and the
//! list call driving the fetch.

pub mod fetch;
pub mod filter;
pub mod select;

pub use fetch::{fetch_all, Page};
pub use filter::{apply_filters, filter_resources, FilterSet, Filterable};
pub use select::{pick_random, resolve_targets};
