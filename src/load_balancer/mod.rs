//! Load balancer resources: load balancers and their backend sets.

pub mod actions;
pub mod probes;

use crate::error::Result;
use crate::oci::OciClient;
use crate::pipeline::{fetch_all, Filterable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Legal filter attributes for load balancers.
pub const LOAD_BALANCER_ATTRIBUTES: &[&str] = &[
    "compartment_id",
    "display_name",
    "id",
    "is_private",
    "lifecycle_state",
    "shape_name",
    "time_created",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancer {
    pub id: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<String>,
    pub compartment_id: Option<String>,
    pub shape_name: Option<String>,
    pub is_private: Option<bool>,
    pub time_created: Option<DateTime<Utc>>,
}

impl Filterable for LoadBalancer {
    const KIND: &'static str = "load balancers";

    fn attribute_names() -> &'static [&'static str] {
        LOAD_BALANCER_ATTRIBUTES
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "compartment_id" => self.compartment_id.clone().map(Value::String),
            "display_name" => self.display_name.clone().map(Value::String),
            "id" => Some(Value::String(self.id.clone())),
            "is_private" => self.is_private.map(Value::Bool),
            "lifecycle_state" => self.lifecycle_state.clone().map(Value::String),
            "shape_name" => self.shape_name.clone().map(Value::String),
            "time_created" => self.time_created.map(|t| Value::String(t.to_rfc3339())),
            _ => None,
        }
    }
}

/// Legal filter attributes for backend sets. Backend sets are identified by
/// name within their parent load balancer, not by an OCID.
pub const BACKEND_SET_ATTRIBUTES: &[&str] = &["name", "policy"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackendSet {
    pub name: String,
    pub policy: Option<String>,
}

impl Filterable for BackendSet {
    const KIND: &'static str = "backend sets";

    fn attribute_names() -> &'static [&'static str] {
        BACKEND_SET_ATTRIBUTES
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(Value::String(self.name.clone())),
            "policy" => self.policy.clone().map(Value::String),
            _ => None,
        }
    }
}

/// Return a complete, unfiltered list of load balancers in the compartment.
pub async fn get_load_balancers(
    client: &OciClient,
    compartment_id: &str,
) -> Result<Vec<LoadBalancer>> {
    fetch_all(|page| {
        client.get_page(
            client.lb_url("loadBalancers", &[("compartmentId", compartment_id)]),
            page,
        )
    })
    .await
}

/// Return a complete, unfiltered list of backend sets behind the given load
/// balancer.
pub async fn get_backend_sets(
    client: &OciClient,
    load_balancer_id: &str,
) -> Result<Vec<BackendSet>> {
    fetch_all(|page| {
        client.get_page(
            client.lb_url(&format!("loadBalancers/{}/backendSets", load_balancer_id), &[]),
            page,
        )
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn backend_set_is_identified_by_name() {
        let set: BackendSet = serde_json::from_value(json!({
            "name": "bs-primary",
            "policy": "ROUND_ROBIN",
            "backends": []
        }))
        .unwrap();
        assert_eq!(set.attribute("name"), Some(Value::String("bs-primary".into())));
        assert_eq!(set.attribute("backends"), None);
    }
}
