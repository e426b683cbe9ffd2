//! Property-based tests using proptest
//!
//! These tests verify the filtering pipeline over randomized instance
//! listings: filters only ever narrow, narrowing preserves control-plane
//! order, and illegal attribute names are rejected up front.

use chaosoci::compute::Instance;
use chaosoci::pipeline::{apply_filters, filter_resources, pick_random, FilterSet};
use chaosoci::ActivityError;
use proptest::prelude::*;
use serde_json::json;

/// Generate an arbitrary compute instance listing entry.
fn arb_instance() -> impl Strategy<Value = Instance> {
    (
        "inst-[a-z0-9]{8}",
        prop_oneof!["RUNNING", "STOPPED", "STOPPING", "TERMINATED", "PROVISIONING"],
        prop_oneof![
            "VM.Standard2.1",
            "VM.Standard2.2",
            "VM.Standard.E4.Flex",
            "BM.Standard2.52"
        ],
        proptest::option::of("[a-z]{3,10}"),
    )
        .prop_map(|(id, state, shape, display_name)| Instance {
            id,
            display_name,
            lifecycle_state: Some(state.to_string()),
            availability_domain: None,
            compartment_id: Some("ocid1.compartment.oc1..test".into()),
            fault_domain: None,
            image_id: None,
            launch_mode: None,
            region: None,
            shape: Some(shape.to_string()),
            time_created: None,
        })
}

fn arb_instance_list() -> impl Strategy<Value = Vec<Instance>> {
    prop::collection::vec(arb_instance(), 1..50)
}

fn state_filter(state: &str) -> FilterSet {
    let mut filters = FilterSet::new();
    filters.insert("lifecycle_state".into(), json!(state));
    filters
}

proptest! {
    /// Filtering never increases the number of resources.
    #[test]
    fn filter_never_increases_count(
        instances in arb_instance_list(),
        state in prop_oneof!["RUNNING", "STOPPED", "TERMINATED"]
    ) {
        let filters = state_filter(&state);
        if let Ok(filtered) = filter_resources(&instances, &filters) {
            prop_assert!(filtered.len() <= instances.len());
        }
    }

    /// Filtering an already-filtered listing changes nothing.
    #[test]
    fn filter_is_idempotent(
        instances in arb_instance_list(),
        state in prop_oneof!["RUNNING", "STOPPED"]
    ) {
        let filters = state_filter(&state);
        if let Ok(once) = filter_resources(&instances, &filters) {
            if !once.is_empty() {
                let twice = filter_resources(&once, &filters).unwrap();
                prop_assert_eq!(once, twice);
            }
        }
    }

    /// Every survivor matches every filter pair, and nothing matching was
    /// dropped.
    #[test]
    fn filters_are_a_conjunction(instances in arb_instance_list()) {
        let mut filters = state_filter("RUNNING");
        filters.insert("shape".into(), json!("VM.Standard2.1"));

        if let Ok(filtered) = filter_resources(&instances, &filters) {
            for instance in &filtered {
                prop_assert_eq!(instance.lifecycle_state.as_deref(), Some("RUNNING"));
                prop_assert_eq!(instance.shape.as_deref(), Some("VM.Standard2.1"));
            }
            let expected = instances
                .iter()
                .filter(|i| {
                    i.lifecycle_state.as_deref() == Some("RUNNING")
                        && i.shape.as_deref() == Some("VM.Standard2.1")
                })
                .count();
            prop_assert_eq!(filtered.len(), expected);
        }
    }

    /// Survivors keep the order the control plane returned them in.
    #[test]
    fn filtering_preserves_listing_order(instances in arb_instance_list()) {
        let filters = state_filter("RUNNING");
        if let Ok(filtered) = filter_resources(&instances, &filters) {
            let surviving_ids: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
            let expected: Vec<&str> = instances
                .iter()
                .filter(|i| i.lifecycle_state.as_deref() == Some("RUNNING"))
                .map(|i| i.id.as_str())
                .collect();
            prop_assert_eq!(surviving_ids, expected);
        }
    }

    /// An empty filter set keeps the whole listing.
    #[test]
    fn empty_filter_set_keeps_everything(instances in arb_instance_list()) {
        let filtered = filter_resources(&instances, &FilterSet::new()).unwrap();
        prop_assert_eq!(filtered, instances);
    }

    /// Unknown attribute names are rejected before any matching happens.
    #[test]
    fn unknown_attribute_names_are_rejected(
        instances in arb_instance_list(),
        bogus in "[A-Z][a-zA-Z]{4,12}"
    ) {
        let mut filters = FilterSet::new();
        filters.insert(bogus.clone(), json!("anything"));

        let err = filter_resources(&instances, &filters).unwrap_err();
        match err {
            ActivityError::InvalidFilter { kind, names } => {
                prop_assert_eq!(kind, "instances");
                prop_assert_eq!(names, vec![bogus]);
            }
            other => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Suppressed filters pass every listing through untouched, including
    /// empty ones.
    #[test]
    fn absent_filters_pass_listings_through(
        instances in prop::collection::vec(arb_instance(), 0..50)
    ) {
        let expected = instances.clone();
        let passed = apply_filters(instances, None).unwrap();
        prop_assert_eq!(passed, expected);
    }

    /// The random pick always comes from the candidate set.
    #[test]
    fn random_pick_is_a_candidate(instances in arb_instance_list()) {
        let picked = pick_random(&instances).unwrap();
        prop_assert!(instances.iter().any(|i| i.id == picked.id));
    }
}

/// Empty listings are terminal for filter search, not silently empty.
#[test]
fn empty_listing_is_rejected() {
    let err = filter_resources::<Instance>(&[], &state_filter("RUNNING")).unwrap_err();
    assert!(matches!(err, ActivityError::NoResources("instances")));
}

/// Picking from nothing is terminal too.
#[test]
fn random_pick_from_nothing_is_rejected() {
    let err = pick_random::<Instance>(&[]).unwrap_err();
    assert!(matches!(err, ActivityError::NoMatch("instances")));
}
