//! Predicate filter.
//!
//! A filter set maps attribute names to expected values; a resource matches
//! when every pair compares equal (exact equality, logical AND). Attribute
//! names are checked against the resource kind's legal set before any value
//! is examined: partial filtering may select resources we do not want, so an
//! unknown name fails the whole call instead.

use crate::error::{ActivityError, Result};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// Attribute name to expected value; insertion order is irrelevant.
pub type FilterSet = BTreeMap<String, Value>;

/// A resource kind that can be filtered by attribute name.
///
/// Implemented once per kind as a small adapter: the legal attribute-name
/// set is declarative and authoritative, not derived from whichever fields
/// happen to be populated on a given resource.
pub trait Filterable {
    /// Plural kind name used in error messages, e.g. `"instances"`.
    const KIND: &'static str;

    /// The legal filter attribute names for this kind.
    fn attribute_names() -> &'static [&'static str];

    /// Current value of a named attribute; `None` when the attribute is
    /// unset on this resource. An absent value never equals an expected one.
    fn attribute(&self, name: &str) -> Option<Value>;
}

/// Return only those resources that match every filter, preserving input
/// order. An empty input collection is a terminal error: there is nothing
/// to validate the filter against, and silently matching nothing would hide
/// a wrong scope from the operator.
pub fn filter_resources<T>(resources: &[T], filters: &FilterSet) -> Result<Vec<T>>
where
    T: Filterable + Clone,
{
    if resources.is_empty() {
        return Err(ActivityError::NoResources(T::KIND));
    }

    let legal: HashSet<&str> = T::attribute_names().iter().copied().collect();
    let unknown: Vec<String> = filters
        .keys()
        .filter(|name| !legal.contains(name.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(ActivityError::InvalidFilter {
            kind: T::KIND,
            names: unknown,
        });
    }

    Ok(resources
        .iter()
        .filter(|resource| {
            filters
                .iter()
                .all(|(attr, expected)| resource.attribute(attr).as_ref() == Some(expected))
        })
        .cloned()
        .collect())
}

/// Apply filters only when the caller actually supplied some. `None` and an
/// empty map both mean "no filtering requested" and pass the collection
/// through untouched, empty or not.
pub fn apply_filters<T>(resources: Vec<T>, filters: Option<&FilterSet>) -> Result<Vec<T>>
where
    T: Filterable + Clone,
{
    match filters {
        Some(filters) if !filters.is_empty() => filter_resources(&resources, filters),
        _ => Ok(resources),
    }
}
