//! Explicit registry of the activities this extension exports.
//!
//! The host experiment runner invokes activities by name; this table is the
//! authoritative mapping from activity name to the module that implements
//! it. Registration is explicit rather than discovered by reflection.

/// What a host runner is allowed to do with an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// Disrupts live resources.
    Action,
    /// Read-only inspection.
    Probe,
}

/// One exported activity.
#[derive(Debug, Clone, Copy)]
pub struct Activity {
    pub name: &'static str,
    pub kind: ActivityKind,
    pub module: &'static str,
}

const fn action(name: &'static str, module: &'static str) -> Activity {
    Activity {
        name,
        kind: ActivityKind::Action,
        module,
    }
}

const fn probe(name: &'static str, module: &'static str) -> Activity {
    Activity {
        name,
        kind: ActivityKind::Probe,
        module,
    }
}

/// Every activity exported by this extension.
pub const ACTIVITIES: &[Activity] = &[
    // compute
    action("stop_instance", "compute::actions"),
    action("stop_random_instance", "compute::actions"),
    action("stop_instances_in_compartment", "compute::actions"),
    action("start_instance_pool", "compute::actions"),
    action("stop_instance_pool", "compute::actions"),
    action("terminate_instance_pool", "compute::actions"),
    action("reset_instance_pool", "compute::actions"),
    action("softreset_instance_pool", "compute::actions"),
    action("start_all_instance_pools_in_compartment", "compute::actions"),
    action("stop_all_instance_pools_in_compartment", "compute::actions"),
    action(
        "terminate_all_instance_pools_in_compartment",
        "compute::actions",
    ),
    action("reset_all_instance_pools_in_compartment", "compute::actions"),
    action(
        "softreset_all_instance_pools_in_compartment",
        "compute::actions",
    ),
    probe("count_instances", "compute::probes"),
    probe("count_instance_pools", "compute::probes"),
    // networking
    action("delete_route_table_by_id", "networking::actions"),
    action("delete_route_table_by_filters", "networking::actions"),
    action("delete_nat_gateway_by_id", "networking::actions"),
    action("delete_nat_gateway_by_filters", "networking::actions"),
    action("delete_internet_gateway_by_id", "networking::actions"),
    action("delete_internet_gateway_by_filters", "networking::actions"),
    action("delete_service_gateway_by_id", "networking::actions"),
    action("delete_service_gateway_by_filters", "networking::actions"),
    probe("count_route_tables", "networking::probes"),
    probe("count_nat_gateways", "networking::probes"),
    probe("count_internet_gateways", "networking::probes"),
    probe("count_service_gateways", "networking::probes"),
    // load balancer
    action("delete_backend_server", "load_balancer::actions"),
    action("delete_backend_set", "load_balancer::actions"),
    action("delete_hostname", "load_balancer::actions"),
    action("delete_listener", "load_balancer::actions"),
    action("delete_load_balancer", "load_balancer::actions"),
    action("delete_path_route_set", "load_balancer::actions"),
    action("delete_routing_policy", "load_balancer::actions"),
    probe("count_load_balancers", "load_balancer::probes"),
    probe("count_backend_sets", "load_balancer::probes"),
    // object storage
    action("delete_bucket", "object_storage::actions"),
    action("delete_buckets_in_compartment", "object_storage::actions"),
    action("delete_object", "object_storage::actions"),
    action("delete_objects_in_compartment", "object_storage::actions"),
    probe("count_buckets", "object_storage::probes"),
    probe("count_objects", "object_storage::probes"),
];

/// Look up an exported activity by name.
pub fn find_activity(name: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn activity_names_are_unique() {
        let names: HashSet<&str> = ACTIVITIES.iter().map(|a| a.name).collect();
        assert_eq!(names.len(), ACTIVITIES.len());
    }

    #[test]
    fn known_activities_are_registered() {
        assert!(matches!(
            find_activity("stop_random_instance").map(|a| a.kind),
            Some(ActivityKind::Action)
        ));
        assert!(matches!(
            find_activity("count_route_tables").map(|a| a.kind),
            Some(ActivityKind::Probe)
        ));
        assert!(find_activity("discover_the_universe").is_none());
    }

    #[test]
    fn probes_never_live_in_action_modules() {
        for activity in ACTIVITIES {
            match activity.kind {
                ActivityKind::Action => assert!(activity.module.ends_with("::actions")),
                ActivityKind::Probe => assert!(activity.module.ends_with("::probes")),
            }
        }
    }
}
